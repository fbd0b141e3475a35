//! Mutable per-character state carried between frames.

use bevy::prelude::*;

use crate::config::ControllerConfig;

/// State owned by one controller and mutated every frame.
///
/// `vertical_velocity` is the accumulator shared by ground sensing, jumping
/// and gravity. `current_move_speed` starts at the configured speed and may
/// be rewritten by external modifiers such as sprinting.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq, Default)]
#[reflect(Component, Default)]
pub struct ControllerState {
    /// Signed vertical speed; positive is upward.
    pub vertical_velocity: f32,
    /// Grounded flag last reported by the capsule body.
    pub is_grounded: bool,
    /// Horizontal speed used by the locomotion step.
    pub current_move_speed: f32,
}

impl ControllerState {
    /// Creates the initial state for `config`: at rest, not yet grounded.
    ///
    /// # Examples
    ///
    /// ```
    /// use stride::{ControllerConfig, ControllerState};
    ///
    /// let state = ControllerState::new(&ControllerConfig::default());
    /// assert_eq!(state.vertical_velocity, 0.0);
    /// assert!((state.current_move_speed - 2.0).abs() < f32::EPSILON);
    /// ```
    #[must_use]
    pub const fn new(config: &ControllerConfig) -> Self {
        Self {
            vertical_velocity: 0.0,
            is_grounded: false,
            current_move_speed: config.move_speed,
        }
    }
}
