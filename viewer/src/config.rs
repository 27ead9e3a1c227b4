//! Tunable gesture limits and sensitivities.
//!
//! The wheel step and pinch sensitivity are device-feel constants rather than
//! invariants, so hosts may override them from JSON. Missing fields fall back
//! to the defaults in [`crate::consts`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SCALE, MIN_SCALE, PINCH_SENSITIVITY, WHEEL_STEP};

/// Error returned by [`GestureConfig::from_json`] and [`GestureConfig::validate`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The input was not valid JSON for a `GestureConfig`.
    #[error("failed to parse gesture config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The scale range is empty, inverted, or starts below 1.
    #[error("invalid scale range: min {min}, max {max}")]
    InvalidScaleRange { min: f64, max: f64 },
    /// A sensitivity is zero, negative or not finite.
    #[error("{field} must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    pub min_scale: f64,
    pub max_scale: f64,
    pub wheel_step: f64,
    pub pinch_sensitivity: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            wheel_step: WHEEL_STEP,
            pinch_sensitivity: PINCH_SENSITIVITY,
        }
    }
}

impl GestureConfig {
    /// Parse and validate a JSON override.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and the validation
    /// errors of [`GestureConfig::validate`] otherwise.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the scale range and sensitivities.
    ///
    /// The lower scale bound may not drop below 1: the pan bound formula
    /// assumes the image never becomes smaller than the viewport.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let range_ok = self.min_scale.is_finite()
            && self.max_scale.is_finite()
            && self.min_scale >= MIN_SCALE
            && self.min_scale < self.max_scale;
        if !range_ok {
            return Err(ConfigError::InvalidScaleRange { min: self.min_scale, max: self.max_scale });
        }
        for (field, value) in [("wheel_step", self.wheel_step), ("pinch_sensitivity", self.pinch_sensitivity)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        Ok(())
    }

    /// `self` if it passes [`GestureConfig::validate`], otherwise the
    /// defaults. The rejection is logged.
    #[must_use]
    pub fn or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(err) => {
                log::warn!("viewer: rejected gesture config, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Clamp `scale` into the configured range.
    ///
    /// An inverted range resolves to `max_scale` instead of panicking.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.max(self.min_scale).min(self.max_scale)
    }
}
