//! Utility helpers for tests.
//!
//! Recording host collaborators plus a few geometric assertions shared by
//! the integration suites.

pub mod doubles;

use std::cell::RefCell;
use std::rc::Rc;

use approx::relative_eq;
use glam::{EulerRot, Quat, Vec3};

pub use doubles::{RecordingCapsule, RecordingCursor};

/// Wraps `value` so a test keeps a handle after giving it to a controller.
///
/// # Examples
/// ```
/// use test_utils::shared;
/// let handle = shared(3_u8);
/// let kept = std::rc::Rc::clone(&handle);
/// *handle.borrow_mut() = 4;
/// assert_eq!(*kept.borrow(), 4);
/// ```
pub fn shared<T>(value: T) -> Rc<RefCell<T>> {
    Rc::new(RefCell::new(value))
}

/// Yaw of `rotation` about the vertical axis, in degrees.
pub fn yaw_degrees_of(rotation: Quat) -> f32 {
    rotation.to_euler(EulerRot::YXZ).0.to_degrees()
}

/// Assert that two vectors agree component-wise within `epsilon`.
///
/// # Panics
/// Panics with both vectors in the message when any component differs.
pub fn assert_vec3_near(actual: Vec3, expected: Vec3, epsilon: f32) {
    let close = relative_eq!(actual.x, expected.x, epsilon = epsilon)
        && relative_eq!(actual.y, expected.y, epsilon = epsilon)
        && relative_eq!(actual.z, expected.z, epsilon = epsilon);
    assert!(close, "expected {expected:?} within {epsilon}, got {actual:?}");
}
