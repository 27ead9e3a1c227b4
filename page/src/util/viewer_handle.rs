//! Shared handle to the overlay for DOM event closures.
//!
//! Every event listener on the page owns a clone of the handle; all of them
//! mutate the one overlay through `Rc<RefCell<_>>`. Each call returns a
//! [`ViewState`] snapshot for the component to publish to its signals.

#[cfg(test)]
#[path = "viewer_handle_test.rs"]
mod viewer_handle_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use viewer::input::InputEvent;
use viewer::overlay::{PageHost, ViewerOverlay};
use viewer::transform::Point;

use crate::util::input_map::{TouchPhase, TouchTap, touch_input};

/// What the component needs to know to show or hide the overlay.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub is_open: bool,
    pub image: Option<String>,
}

pub struct ViewerHandle<H: PageHost> {
    overlay: Rc<RefCell<ViewerOverlay<H>>>,
    touch: Rc<Cell<TouchTap>>,
}

impl<H: PageHost> Clone for ViewerHandle<H> {
    fn clone(&self) -> Self {
        Self { overlay: Rc::clone(&self.overlay), touch: Rc::clone(&self.touch) }
    }
}

impl<H: PageHost> ViewerHandle<H> {
    #[must_use]
    pub fn new(overlay: ViewerOverlay<H>) -> Self {
        Self { overlay: Rc::new(RefCell::new(overlay)), touch: Rc::new(Cell::new(TouchTap::default())) }
    }

    pub fn open_image(&self, src: &str) -> ViewState {
        self.update(|overlay| overlay.open_image(src));
        self.view_state()
    }

    pub fn close(&self) -> ViewState {
        self.update(ViewerOverlay::close);
        self.view_state()
    }

    /// Backdrop click: closes unless the press ended a pan.
    pub fn tap(&self) -> ViewState {
        self.update(|overlay| {
            overlay.handle_tap_or_click();
        });
        self.view_state()
    }

    /// Returns whether the key was consumed, plus the resulting state.
    pub fn key(&self, key: &str) -> (bool, ViewState) {
        let consumed = self.update(|overlay| overlay.handle_key(key)).unwrap_or(false);
        (consumed, self.view_state())
    }

    /// Returns whether the transform changed.
    pub fn forward(&self, event: &InputEvent) -> bool {
        self.update(|overlay| overlay.forward(event)).unwrap_or(false)
    }

    /// Feed one touch event; `points` are the fingers still down.
    ///
    /// Lifting the last finger of a single-finger interaction is handled as
    /// a backdrop tap, and the resulting state is returned.
    pub fn touch(&self, phase: TouchPhase, points: Vec<Point>) -> Option<ViewState> {
        let mut tap = self.touch.get();
        let tapped = tap.observe(phase, points.len());
        self.touch.set(tap);
        self.forward(&touch_input(phase, points));
        tapped.then(|| self.tap())
    }

    pub fn view_state(&self) -> ViewState {
        match self.overlay.try_borrow() {
            Ok(overlay) => ViewState { is_open: overlay.is_open(), image: overlay.image().map(str::to_owned) },
            Err(_) => ViewState::default(),
        }
    }

    /// Run `f` on the overlay. A re-entrant call from inside a render
    /// callback is dropped rather than panicking on the borrow.
    fn update<R>(&self, f: impl FnOnce(&mut ViewerOverlay<H>) -> R) -> Option<R> {
        match self.overlay.try_borrow_mut() {
            Ok(mut overlay) => Some(f(&mut overlay)),
            Err(_) => {
                log::warn!("viewer: dropped re-entrant overlay update");
                None
            }
        }
    }
}
