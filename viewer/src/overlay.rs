//! Full-screen overlay lifecycle.
//!
//! `ViewerOverlay` owns the open/close state machine and the page scroll
//! contract: on open it snapshots the scroll offset and locks page scrolling,
//! on close it unlocks and restores exactly that snapshot. While open it
//! routes normalized input into a [`GestureController`] and pushes every
//! changed [`Transform`] to the host's render callback.
//!
//! The controller only exists while the overlay is open. It is created fresh
//! on open and dropped on close, so no gesture state survives into the next
//! opening.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

use crate::config::GestureConfig;
use crate::gesture::GestureController;
use crate::input::InputEvent;
use crate::transform::{Transform, Viewport};

/// Capabilities the host page provides to the overlay.
pub trait PageHost {
    /// Current vertical page scroll offset.
    fn scroll_offset(&self) -> f64;
    /// Scroll the page to `offset`.
    fn set_scroll_offset(&mut self, offset: f64);
    /// Enable or disable page scrolling behind the overlay.
    fn set_scroll_locked(&mut self, locked: bool);
    /// Current display size, read whenever pan bounds are needed.
    fn viewport(&self) -> Viewport;
}

/// Precondition violations on the lifecycle transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OverlayError {
    #[error("overlay is already open")]
    AlreadyOpen,
    #[error("overlay is not open")]
    NotOpen,
}

/// Open flag plus the scroll snapshot taken when it opened.
///
/// `saved_scroll_y` is `Some` exactly while `is_open` is true.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OverlayState {
    pub is_open: bool,
    pub saved_scroll_y: Option<f64>,
}

/// Called with the transform to apply whenever it changes.
pub type RenderCallback = Box<dyn FnMut(Transform)>;

pub struct ViewerOverlay<H: PageHost> {
    host: H,
    config: GestureConfig,
    state: OverlayState,
    gesture: Option<GestureController>,
    image: Option<String>,
    on_render: Option<RenderCallback>,
}

impl<H: PageHost> ViewerOverlay<H> {
    #[must_use]
    pub fn new(host: H) -> Self {
        Self::with_config(host, GestureConfig::default())
    }

    /// An invalid `config` is replaced by the defaults.
    #[must_use]
    pub fn with_config(host: H, config: GestureConfig) -> Self {
        Self { host, config: config.or_default(), state: OverlayState::default(), gesture: None, image: None, on_render: None }
    }

    pub fn set_render_callback(&mut self, callback: impl FnMut(Transform) + 'static) {
        self.on_render = Some(Box::new(callback));
    }

    // --- Queries ---

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    #[must_use]
    pub fn state(&self) -> OverlayState {
        self.state
    }

    /// The live transform, or identity while closed.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.gesture.as_ref().map_or(Transform::IDENTITY, GestureController::transform)
    }

    #[must_use]
    pub fn gesture(&self) -> Option<&GestureController> {
        self.gesture.as_ref()
    }

    /// Source of the image being shown, if one was supplied on open.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    // --- Lifecycle ---

    /// Open the overlay. A repeated open is ignored.
    pub fn open(&mut self) {
        if let Err(err) = self.try_open() {
            log::debug!("viewer: ignoring open: {err}");
        }
    }

    /// Open the overlay on `src`. Ignored, image included, if already open.
    pub fn open_image(&mut self, src: impl Into<String>) {
        if self.state.is_open {
            log::debug!("viewer: ignoring open: {}", OverlayError::AlreadyOpen);
            return;
        }
        self.image = Some(src.into());
        self.open();
    }

    /// Open the overlay, reporting a repeated open as an error.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::AlreadyOpen`] without touching the host.
    pub fn try_open(&mut self) -> Result<(), OverlayError> {
        if self.state.is_open {
            return Err(OverlayError::AlreadyOpen);
        }
        let scroll_y = self.host.scroll_offset();
        self.state.saved_scroll_y = Some(scroll_y);
        self.host.set_scroll_locked(true);

        let mut gesture = GestureController::new(self.config);
        gesture.set_viewport(self.host.viewport());
        self.gesture = Some(gesture);
        self.state.is_open = true;

        log::debug!("viewer: opened at scroll {scroll_y}");
        self.render();
        Ok(())
    }

    /// Close the overlay. A repeated close is ignored.
    pub fn close(&mut self) {
        if let Err(err) = self.try_close() {
            log::debug!("viewer: ignoring close: {err}");
        }
    }

    /// Close the overlay, reporting a close while closed as an error.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::NotOpen`] without touching the host.
    pub fn try_close(&mut self) -> Result<(), OverlayError> {
        if !self.state.is_open {
            return Err(OverlayError::NotOpen);
        }
        self.state.is_open = false;
        self.host.set_scroll_locked(false);
        if let Some(scroll_y) = self.state.saved_scroll_y.take() {
            self.host.set_scroll_offset(scroll_y);
            log::debug!("viewer: closed, restored scroll {scroll_y}");
        }
        self.gesture = None;
        self.image = None;
        self.render();
        Ok(())
    }

    /// Backdrop press-and-release. Closes unless the interaction was a pan.
    ///
    /// Returns whether the overlay closed.
    pub fn handle_tap_or_click(&mut self) -> bool {
        let Some(gesture) = &self.gesture else {
            return false;
        };
        if gesture.was_dragging() {
            return false;
        }
        self.close();
        true
    }

    /// Keyboard input while open. `Escape` closes.
    ///
    /// Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if self.state.is_open && key == "Escape" {
            self.close();
            return true;
        }
        false
    }

    // --- Input ---

    /// Route a normalized input event to the gesture controller.
    ///
    /// Events arriving while closed are dropped. Returns whether the
    /// transform changed.
    pub fn forward(&mut self, event: &InputEvent) -> bool {
        let viewport = self.host.viewport();
        let Some(gesture) = self.gesture.as_mut() else {
            return false;
        };
        let resized = gesture.set_viewport(viewport);
        let moved = match event {
            InputEvent::Wheel { delta_y } => gesture.on_wheel(*delta_y),
            InputEvent::PointerDown { points } => gesture.on_pointer_down(points),
            InputEvent::PointerMove { points } => gesture.on_pointer_move(points),
            InputEvent::PointerUp => gesture.on_pointer_up(),
        };
        let changed = resized || moved;
        if changed {
            self.render();
        }
        changed
    }

    fn render(&mut self) {
        let transform = self.transform();
        if let Some(callback) = self.on_render.as_mut() {
            callback(transform);
        }
    }
}
