//! Character yaw chasing the camera yaw.
//!
//! Facing always converges to the camera yaw regardless of the direction of
//! travel; there is no back- or strafe-relative facing.

use glam::Quat;

/// Rotation about the vertical axis matching `camera_yaw_degrees`.
#[must_use]
pub fn heading_target(camera_yaw_degrees: f32) -> Quat {
    Quat::from_rotation_y(camera_yaw_degrees.to_radians())
}

/// Advances `current` one frame toward the camera yaw.
///
/// Uses a spherical interpolation with factor `rate * delta_seconds`, clamped
/// to `[0, 1]`, so each frame closes a fixed fraction of the remaining angle:
/// an exponential approach that only snaps when the factor saturates.
///
/// # Examples
///
/// ```
/// use glam::Quat;
/// use stride::{heading_target, step_heading};
///
/// let next = step_heading(Quat::IDENTITY, 90.0, 15.0, 1.0 / 60.0);
/// let remaining = next.angle_between(heading_target(90.0));
/// assert!(remaining > 0.0 && remaining < 90_f32.to_radians());
/// ```
#[must_use]
pub fn step_heading(
    current: Quat,
    camera_yaw_degrees: f32,
    rate: f32,
    delta_seconds: f32,
) -> Quat {
    let factor = (rate * delta_seconds).clamp(0.0, 1.0);
    current.slerp(heading_target(camera_yaw_degrees), factor)
}
