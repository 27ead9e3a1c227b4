//! Input model: normalized host events and the pointer session state machine.
//!
//! The host collapses DOM wheel, mouse and touch events into [`InputEvent`]
//! values before forwarding them. `PointerSession` is the gesture being
//! tracked between press and release.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::transform::Point;

/// A raw input event after the host has mapped it out of the DOM.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Wheel / trackpad scroll. Only the vertical delta drives zoom.
    Wheel {
        /// Vertical scroll amount (positive = down = zoom out).
        delta_y: f64,
    },
    /// Press or touch-start. Carries every active contact.
    PointerDown { points: Vec<Point> },
    /// Pointer or touch movement. Carries every active contact.
    PointerMove { points: Vec<Point> },
    /// Release or touch-end.
    PointerUp,
}

impl InputEvent {
    /// Number of active contacts carried by the event.
    #[must_use]
    pub fn contact_count(&self) -> usize {
        match self {
            Self::PointerDown { points } | Self::PointerMove { points } => points.len(),
            Self::Wheel { .. } | Self::PointerUp => 0,
        }
    }
}

/// The in-progress interaction between press and release.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PointerSession {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Single-contact pan of a zoomed image.
    Dragging {
        /// Chosen so that `(point - anchor) / scale` equals the offset at press time.
        anchor: Point,
        /// Screen position of the press, used to tell a drag from a tap.
        press: Point,
    },
    /// Two-contact pinch zoom.
    Pinching {
        /// Distance between the two contacts at the previous event.
        last_distance: f64,
    },
}

impl PointerSession {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    #[must_use]
    pub fn is_pinching(&self) -> bool {
        matches!(self, Self::Pinching { .. })
    }
}
