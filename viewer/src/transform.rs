#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use crate::consts::MIN_SCALE;

/// A point in screen space (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Current display dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Zoom and pan applied to the viewed image.
///
/// `offset_x` / `offset_y` are in pre-scale units: the host renders
/// `scale(s) translate(x, y)`, so the on-screen displacement is `offset * scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// Unzoomed, centered.
    pub const IDENTITY: Self = Self { scale: 1.0, offset_x: 0.0, offset_y: 0.0 };

    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Maximum absolute offset on each axis at the current scale.
    ///
    /// Collapses to zero at scale 1, where the image exactly fills the viewport.
    #[must_use]
    pub fn pan_bound(&self, viewport: Viewport) -> (f64, f64) {
        let scale = self.scale.max(MIN_SCALE);
        let factor = (scale - 1.0) / (2.0 * scale);
        (factor * viewport.width.max(0.0), factor * viewport.height.max(0.0))
    }

    /// Clamp the offsets into the pan bound for `viewport`.
    pub fn clamp_offset(&mut self, viewport: Viewport) {
        let (max_x, max_y) = self.pan_bound(viewport);
        self.offset_x = self.offset_x.clamp(-max_x, max_x);
        self.offset_y = self.offset_y.clamp(-max_y, max_y);
    }

    /// CSS `transform` value for the host to apply to the image element.
    #[must_use]
    pub fn css(&self) -> String {
        format!("scale({}) translate({}px, {}px)", self.scale, self.offset_x, self.offset_y)
    }
}
