//! Controller tuning loaded from JSON and validated before use.
//!
//! [`ControllerConfig`] is immutable for the lifetime of a controller. It is
//! also a Bevy [`Resource`] so [`crate::LocomotionPlugin`] can read the same
//! values from the ECS world.

use std::fs;
use std::path::{Path, PathBuf};

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    DEFAULT_BODY_MASS, DEFAULT_GRAVITY_ACCELERATION, DEFAULT_JUMP_APEX_HEIGHT,
    DEFAULT_MAX_ZOOM_DISTANCE, DEFAULT_MIN_ZOOM_DISTANCE, DEFAULT_MOVE_SPEED,
    DEFAULT_ROTATION_LERP_RATE, DEFAULT_ZOOM_SENSITIVITY_DIVISOR,
};
use crate::zoom::ZoomTrigger;

/// Failure raised while loading or validating a [`ControllerConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read controller config {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The configuration text is not valid JSON for this schema.
    #[error("failed to parse controller config: {0}")]
    Parse(#[from] serde_json::Error),
    /// `min_zoom_distance` exceeds `max_zoom_distance`.
    #[error("min_zoom_distance {min} exceeds max_zoom_distance {max}")]
    InvertedZoomRange {
        /// Configured lower bound.
        min: f32,
        /// Configured upper bound.
        max: f32,
    },
    /// A zero divisor would turn every non-inverted zoom into infinity.
    #[error("zoom_sensitivity_divisor must be nonzero")]
    ZeroZoomDivisor,
    /// A tuning value is NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
        /// Value that failed the check.
        value: f32,
    },
}

/// Tuning values for a single controller.
///
/// Every field falls back to its default when omitted from JSON, so a
/// configuration file only needs to name the values it overrides.
///
/// # Examples
///
/// ```
/// use stride::ControllerConfig;
///
/// let config = ControllerConfig::from_json_str(r#"{ "move_speed": 4.0 }"#).unwrap();
/// assert!((config.move_speed - 4.0).abs() < f32::EPSILON);
/// assert!((config.max_zoom_distance - 8.0).abs() < f32::EPSILON);
/// ```
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControllerConfig {
    /// Horizontal speed in world units per second.
    pub move_speed: f32,
    /// Height fed into the jump launch formula.
    pub jump_apex_height: f32,
    /// Scale applied to gravity and the jump formula.
    ///
    /// Despite the name this is a feel knob rather than a physical mass: it
    /// multiplies gravity and appears under the jump square root.
    pub body_mass: f32,
    /// Vertical acceleration; negative values pull downward.
    pub gravity_acceleration: f32,
    /// Heading slerp rate per second.
    pub rotation_lerp_rate: f32,
    /// Divisor applied to zoom input unless `inverted_scroll` is set.
    pub zoom_sensitivity_divisor: f32,
    /// Lower bound for the camera rig distance.
    pub min_zoom_distance: f32,
    /// Upper bound for the camera rig distance.
    pub max_zoom_distance: f32,
    /// Uses the raw zoom input, bypassing the divisor.
    pub inverted_scroll: bool,
    /// Input that triggers and drives zooming.
    pub zoom_trigger: ZoomTrigger,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            move_speed: DEFAULT_MOVE_SPEED,
            jump_apex_height: DEFAULT_JUMP_APEX_HEIGHT,
            body_mass: DEFAULT_BODY_MASS,
            gravity_acceleration: DEFAULT_GRAVITY_ACCELERATION,
            rotation_lerp_rate: DEFAULT_ROTATION_LERP_RATE,
            zoom_sensitivity_divisor: DEFAULT_ZOOM_SENSITIVITY_DIVISOR,
            min_zoom_distance: DEFAULT_MIN_ZOOM_DISTANCE,
            max_zoom_distance: DEFAULT_MAX_ZOOM_DISTANCE,
            inverted_scroll: false,
            zoom_trigger: ZoomTrigger::default(),
        }
    }
}

impl ControllerConfig {
    /// Parses and validates a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// any error produced by [`Self::validate`].
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read, otherwise
    /// the errors of [`Self::from_json_str`].
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path_ref = path.as_ref();
        let text = fs::read_to_string(path_ref).map_err(|source| ConfigError::Io {
            path: path_ref.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Checks the invariants the controller relies on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonFinite`] for NaN or infinite values,
    /// [`ConfigError::ZeroZoomDivisor`] for a zero divisor and
    /// [`ConfigError::InvertedZoomRange`] when the zoom bounds are reversed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in self.numeric_fields() {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        if self.zoom_sensitivity_divisor == 0.0 {
            return Err(ConfigError::ZeroZoomDivisor);
        }
        if self.min_zoom_distance > self.max_zoom_distance {
            return Err(ConfigError::InvertedZoomRange {
                min: self.min_zoom_distance,
                max: self.max_zoom_distance,
            });
        }
        Ok(())
    }

    const fn numeric_fields(&self) -> [(&'static str, f32); 8] {
        [
            ("move_speed", self.move_speed),
            ("jump_apex_height", self.jump_apex_height),
            ("body_mass", self.body_mass),
            ("gravity_acceleration", self.gravity_acceleration),
            ("rotation_lerp_rate", self.rotation_lerp_rate),
            ("zoom_sensitivity_divisor", self.zoom_sensitivity_divisor),
            ("min_zoom_distance", self.min_zoom_distance),
            ("max_zoom_distance", self.max_zoom_distance),
        ]
    }

    /// Effective vertical acceleration: `body_mass * gravity_acceleration`.
    #[must_use]
    pub fn effective_gravity(&self) -> f32 {
        self.body_mass * self.gravity_acceleration
    }
}
