//! Jump impulse and constant gravity integration.
//!
//! Both steps share [`ControllerState::vertical_velocity`] with the ground
//! sensor. Within one frame the order is ground sensing, jump, then gravity,
//! so a jump fired this frame already moves the capsule this frame.

use glam::Vec3;

use crate::config::ControllerConfig;
use crate::state::ControllerState;

/// Upward speed added by a jump.
///
/// Computed as `sqrt(-jump_apex_height * body_mass * gravity_acceleration)`.
/// `body_mass` is a tuning scale rather than a physical mass and is kept in
/// the formula because removing it changes the jump feel. Gravity pointing
/// upward yields NaN; validation does not forbid it, so callers get NaN.
///
/// Because [`integrate_gravity`] scales gravity by `body_mass` too, the jump
/// peaks at half of `jump_apex_height`. Use [`predicted_apex_height`] for the
/// height actually reached.
///
/// # Examples
///
/// ```
/// use stride::{jump_launch_speed, predicted_apex_height, ControllerConfig};
///
/// let config = ControllerConfig::default();
/// let speed = jump_launch_speed(&config);
/// assert!((speed - 19.62_f32.sqrt()).abs() < 1e-5);
/// assert!((predicted_apex_height(&config) - config.jump_apex_height / 2.0).abs() < 1e-5);
/// ```
#[must_use]
pub fn jump_launch_speed(config: &ControllerConfig) -> f32 {
    (-config.jump_apex_height * config.body_mass * config.gravity_acceleration).sqrt()
}

/// Height a jump reaches under [`integrate_gravity`] in the continuous limit.
///
/// Gravity is scaled by `body_mass` as well, so this is
/// `v0² / (2 · body_mass · |gravity|)`: half of `jump_apex_height` with the
/// launch formula above.
#[must_use]
pub fn predicted_apex_height(config: &ControllerConfig) -> f32 {
    let launch = jump_launch_speed(config);
    launch * launch / (-2.0 * config.effective_gravity())
}

/// Adds the jump impulse when the jump edge and grounded flag coincide.
///
/// The impulse is additive; the ground sensor guarantees a zero accumulator
/// while grounded, so a grounded jump always starts from rest. Returns `true`
/// when the jump fired.
pub fn apply_jump(state: &mut ControllerState, jump_triggered: bool, config: &ControllerConfig) -> bool {
    if !(jump_triggered && state.is_grounded) {
        return false;
    }
    state.vertical_velocity += jump_launch_speed(config);
    true
}

/// Accumulates gravity and returns this frame's vertical displacement.
///
/// Semi-implicit Euler: velocity is updated first and the new velocity drives
/// the displacement. There is no terminal velocity.
pub fn integrate_gravity(
    state: &mut ControllerState,
    config: &ControllerConfig,
    delta_seconds: f32,
) -> Vec3 {
    state.vertical_velocity += config.effective_gravity() * delta_seconds;
    Vec3::new(0.0, state.vertical_velocity, 0.0) * delta_seconds
}
