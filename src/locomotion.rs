//! Camera-relative horizontal movement.

use glam::{Vec2, Vec3};

/// Computes this frame's horizontal displacement.
///
/// Strafe follows the camera's right vector while forward input follows the
/// character's own forward vector, so pushing forward always advances along
/// the facing that [`crate::step_heading`] maintains. Both basis vectors are
/// normalised before they are combined; the vertical component of the sum is
/// then dropped without renormalising, so a pitched basis shortens the step.
///
/// The result is `speed * delta_seconds` long for unit input on level bases.
/// The vertical velocity accumulator is never touched here.
///
/// # Examples
///
/// ```
/// use glam::{Vec2, Vec3};
/// use stride::horizontal_displacement;
///
/// let step = horizontal_displacement(Vec2::new(0.0, 1.0), Vec3::X, Vec3::Z, 2.0, 1.0 / 60.0);
/// assert!(step.abs_diff_eq(Vec3::new(0.0, 0.0, 2.0 / 60.0), 1e-6));
/// ```
#[must_use]
pub fn horizontal_displacement(
    move_axis: Vec2,
    camera_right: Vec3,
    player_forward: Vec3,
    speed: f32,
    delta_seconds: f32,
) -> Vec3 {
    let direction =
        move_axis.x * camera_right.normalize_or_zero() + move_axis.y * player_forward.normalize_or_zero();
    let flat = Vec3::new(direction.x, 0.0, direction.z);
    flat * speed * delta_seconds
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const DT: f32 = 1.0 / 60.0;

    #[rstest]
    #[case::forward(Vec2::new(0.0, 1.0), Vec3::new(0.0, 0.0, 2.0 * DT))]
    #[case::backward(Vec2::new(0.0, -1.0), Vec3::new(0.0, 0.0, -2.0 * DT))]
    #[case::strafe_right(Vec2::new(1.0, 0.0), Vec3::new(2.0 * DT, 0.0, 0.0))]
    #[case::strafe_left(Vec2::new(-1.0, 0.0), Vec3::new(-2.0 * DT, 0.0, 0.0))]
    #[case::idle(Vec2::ZERO, Vec3::ZERO)]
    fn level_basis_maps_axes(#[case] axis: Vec2, #[case] expected: Vec3) {
        let step = horizontal_displacement(axis, Vec3::X, Vec3::Z, 2.0, DT);
        assert!(
            step.abs_diff_eq(expected, 1e-6),
            "expected {expected:?}, got {step:?}"
        );
    }

    #[test]
    fn forward_follows_player_not_camera() {
        // Camera turned a quarter right, player still facing +Z.
        let camera_right = Vec3::NEG_Z;
        let step = horizontal_displacement(Vec2::new(0.0, 1.0), camera_right, Vec3::Z, 1.0, 1.0);
        assert!(step.abs_diff_eq(Vec3::Z, 1e-6));
    }

    #[test]
    fn unnormalised_basis_does_not_scale_speed() {
        let step = horizontal_displacement(Vec2::new(1.0, 0.0), Vec3::X * 5.0, Vec3::Z, 3.0, 1.0);
        assert!(step.abs_diff_eq(Vec3::new(3.0, 0.0, 0.0), 1e-6));
    }

    #[test]
    fn pitched_forward_loses_vertical_component() {
        let pitched = Vec3::new(0.0, 1.0, 1.0);
        let step = horizontal_displacement(Vec2::new(0.0, 1.0), Vec3::X, pitched, 1.0, 1.0);
        assert_eq!(step.y, 0.0);
        assert!((step.z - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
    }

    #[test]
    fn degenerate_basis_contributes_nothing() {
        let step = horizontal_displacement(Vec2::new(1.0, 1.0), Vec3::ZERO, Vec3::Z, 1.0, 1.0);
        assert!(step.abs_diff_eq(Vec3::Z, 1e-6));
    }
}
