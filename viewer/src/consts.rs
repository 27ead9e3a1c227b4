//! Shared numeric constants for the viewer crate.

// ── Scale ───────────────────────────────────────────────────────

/// Fully zoomed out: the image exactly fills the viewport.
pub const MIN_SCALE: f64 = 1.0;

/// Maximum zoom factor.
pub const MAX_SCALE: f64 = 10.0;

// ── Sensitivity ─────────────────────────────────────────────────

/// Scale change per wheel notch, independent of the wheel delta magnitude.
pub const WHEEL_STEP: f64 = 0.1;

/// Scale change per CSS pixel of change in the distance between two touches.
pub const PINCH_SENSITIVITY: f64 = 0.01;

// ── Tap vs drag ─────────────────────────────────────────────────

/// Minimum pointer travel from the press point, in screen pixels, for a
/// single-contact interaction to count as a drag rather than a tap.
pub const DRAG_THRESHOLD_PX: f64 = 1.0;
