//! Zoom/pan gesture state machine.
//!
//! `GestureController` reconciles wheel zoom, single-contact drag and
//! two-contact pinch into one [`Transform`]. Every operation clamps its
//! result, so no input sequence can push the scale or the offsets out of
//! bounds. Malformed input (wrong contact count, move without press,
//! non-finite coordinates) is ignored.
//!
//! Mutating operations return `true` when the transform changed so the caller
//! can skip redundant renders.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use crate::config::GestureConfig;
use crate::consts::DRAG_THRESHOLD_PX;
use crate::input::PointerSession;
use crate::transform::{Point, Transform, Viewport};

#[derive(Debug, Clone)]
pub struct GestureController {
    config: GestureConfig,
    transform: Transform,
    session: PointerSession,
    viewport: Viewport,
    dragged: bool,
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl GestureController {
    /// An invalid `config` is replaced by the defaults.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        let mut controller = Self {
            config: config.or_default(),
            transform: Transform::IDENTITY,
            session: PointerSession::Idle,
            viewport: Viewport::default(),
            dragged: false,
        };
        controller.reset();
        controller
    }

    // --- Queries ---

    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    #[must_use]
    pub fn session(&self) -> PointerSession {
        self.session
    }

    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Whether the interaction that just ended moved a drag session past the
    /// drag threshold. A press-release with no such move is a tap.
    #[must_use]
    pub fn was_dragging(&self) -> bool {
        self.dragged
    }

    fn is_zoomed(&self) -> bool {
        self.transform.scale > self.config.min_scale
    }

    // --- Lifecycle ---

    /// Back to the unzoomed, centered transform with no session.
    pub fn reset(&mut self) {
        self.transform = Transform { scale: self.config.min_scale, ..Transform::IDENTITY };
        self.session = PointerSession::Idle;
        self.dragged = false;
    }

    /// Record the current display size; pan bounds are derived from it.
    ///
    /// Shrinking the viewport re-clamps the offsets immediately.
    pub fn set_viewport(&mut self, viewport: Viewport) -> bool {
        if !(viewport.width.is_finite() && viewport.height.is_finite()) {
            return false;
        }
        self.viewport = viewport;
        let before = self.transform;
        self.transform.clamp_offset(viewport);
        before != self.transform
    }

    // --- Input ---

    /// Step the zoom in (`delta_y < 0`) or out (`delta_y > 0`).
    pub fn on_wheel(&mut self, delta_y: f64) -> bool {
        let step = if delta_y < 0.0 {
            self.config.wheel_step
        } else if delta_y > 0.0 {
            -self.config.wheel_step
        } else {
            return false;
        };
        self.set_scale(self.transform.scale + step)
    }

    /// Start a session for the contacts in `points`.
    pub fn on_pointer_down(&mut self, points: &[Point]) -> bool {
        if !points.iter().all(|p| p.is_finite()) {
            return false;
        }
        self.dragged = false;
        match points {
            [a, b] => {
                self.session = PointerSession::Pinching { last_distance: a.distance(*b) };
            }
            [p] if self.is_zoomed() => {
                let scale = self.transform.scale;
                let anchor = Point::new(p.x - self.transform.offset_x * scale, p.y - self.transform.offset_y * scale);
                self.session = PointerSession::Dragging { anchor, press: *p };
            }
            _ => {}
        }
        false
    }

    /// Advance the active session.
    pub fn on_pointer_move(&mut self, points: &[Point]) -> bool {
        if !points.iter().all(|p| p.is_finite()) {
            return false;
        }
        match (self.session, points) {
            (PointerSession::Pinching { last_distance }, [a, b]) => {
                let distance = a.distance(*b);
                self.session = PointerSession::Pinching { last_distance: distance };
                let delta = distance - last_distance;
                self.set_scale(self.transform.scale + delta * self.config.pinch_sensitivity)
            }
            (PointerSession::Dragging { anchor, press }, [p]) if self.is_zoomed() => {
                if p.distance(press) >= DRAG_THRESHOLD_PX {
                    self.dragged = true;
                }
                let before = self.transform;
                let scale = self.transform.scale;
                self.transform.offset_x = (p.x - anchor.x) / scale;
                self.transform.offset_y = (p.y - anchor.y) / scale;
                self.transform.clamp_offset(self.viewport);
                before != self.transform
            }
            _ => false,
        }
    }

    /// End the active session, whatever it was.
    pub fn on_pointer_up(&mut self) -> bool {
        self.session = PointerSession::Idle;
        false
    }

    fn set_scale(&mut self, scale: f64) -> bool {
        let before = self.transform;
        self.transform.scale = self.config.clamp_scale(scale);
        self.transform.clamp_offset(self.viewport);
        before != self.transform
    }
}
