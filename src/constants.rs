//! Default tuning values for the locomotion controller.
//!
//! These mirror the values the controller shipped with and are used by
//! [`crate::ControllerConfig::default`] and the serde field defaults.

/// Horizontal movement speed in world units per second.
pub const DEFAULT_MOVE_SPEED: f32 = 2.0;
/// Configured jump height, fed into the launch speed formula.
pub const DEFAULT_JUMP_APEX_HEIGHT: f32 = 1.0;
/// Scale applied to gravity and the jump formula. Not a physical mass.
pub const DEFAULT_BODY_MASS: f32 = 2.0;
/// Downward acceleration in world units per second squared.
pub const DEFAULT_GRAVITY_ACCELERATION: f32 = -9.81;
/// Fraction of the remaining heading error closed per second.
pub const DEFAULT_ROTATION_LERP_RATE: f32 = 15.0;
/// Divisor applied to non-inverted zoom input.
pub const DEFAULT_ZOOM_SENSITIVITY_DIVISOR: f32 = 5.0;
/// Closest allowed camera distance.
pub const DEFAULT_MIN_ZOOM_DISTANCE: f32 = 3.0;
/// Farthest allowed camera distance.
pub const DEFAULT_MAX_ZOOM_DISTANCE: f32 = 8.0;

/// Vertical tolerance used by the flat-ground host when deciding whether a
/// capsule rests on the ground plane.
pub const GROUND_CONTACT_EPSILON: f32 = 1e-4;
