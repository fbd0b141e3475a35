//! Interfaces the controller needs from its host.
//!
//! The controller never reaches into global state. Everything it reads or
//! writes outside [`crate::ControllerState`] goes through one of these traits,
//! supplied once at construction through [`crate::ControllerBuilder`].
//!
//! Hosts that want to keep a handle on a collaborator after handing it over
//! can pass an `Rc<RefCell<T>>`; every trait is implemented for that wrapper.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use glam::{EulerRot, Quat, Vec3};

use crate::cursor::CursorState;
use crate::input::FrameInputSnapshot;

/// Kinematic capsule owned by the host physics layer.
#[cfg_attr(test, mockall::automock)]
pub trait CapsuleBody {
    /// Sweeps the capsule by `displacement`, resolving collisions and
    /// updating the grounded flag.
    fn move_and_collide(&mut self, displacement: Vec3);

    /// Whether the last sweep ended resting on ground.
    fn is_grounded(&self) -> bool;

    /// Current facing of the body.
    fn rotation(&self) -> Quat;

    /// Replaces the facing of the body.
    fn set_rotation(&mut self, rotation: Quat);
}

/// Input backend exposing named actions.
#[cfg_attr(test, mockall::automock)]
pub trait InputSource {
    /// Samples the actions for the current frame.
    fn read_frame(&mut self) -> FrameInputSnapshot;
}

/// Read-only view of the camera the movement is resolved against.
#[cfg_attr(test, mockall::automock)]
pub trait CameraView {
    /// Yaw about the vertical axis, in degrees.
    fn yaw_degrees(&self) -> f32;

    /// Camera right vector in world space.
    fn right(&self) -> Vec3;

    /// Camera forward vector in world space.
    fn forward(&self) -> Vec3;
}

/// Distance parameter owned by the camera rig.
#[cfg_attr(test, mockall::automock)]
pub trait ZoomTarget {
    /// Distance the rig currently renders at.
    fn distance(&self) -> f32;

    /// Writes a new rig distance.
    fn set_distance(&mut self, distance: f32);
}

/// Windowing layer accepting pointer lock and visibility requests.
///
/// Implementations that cannot honour a request should ignore it.
#[cfg_attr(test, mockall::automock)]
pub trait CursorControl {
    /// Applies the requested cursor state.
    fn apply_cursor(&mut self, state: CursorState);
}

/// Camera pose captured as plain values.
///
/// The crate uses a `+Y` up, `+Z` forward, `+X` right convention at zero yaw;
/// positive yaw turns forward toward `+X`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    /// Yaw about the vertical axis, in degrees.
    pub yaw_degrees: f32,
    /// Right basis vector.
    pub right: Vec3,
    /// Forward basis vector.
    pub forward: Vec3,
}

impl CameraFrame {
    /// Level camera looking along the given yaw.
    ///
    /// # Examples
    ///
    /// ```
    /// use glam::Vec3;
    /// use stride::CameraFrame;
    ///
    /// let frame = CameraFrame::from_yaw_degrees(0.0);
    /// assert!(frame.forward.abs_diff_eq(Vec3::Z, 1e-6));
    /// assert!(frame.right.abs_diff_eq(Vec3::X, 1e-6));
    /// ```
    #[must_use]
    pub fn from_yaw_degrees(yaw_degrees: f32) -> Self {
        let rotation = Quat::from_rotation_y(yaw_degrees.to_radians());
        Self {
            yaw_degrees,
            right: rotation * Vec3::X,
            forward: rotation * Vec3::Z,
        }
    }

    /// Camera frame for an arbitrary orientation. Pitch and roll are kept in
    /// the basis vectors but dropped from the yaw.
    #[must_use]
    pub fn from_rotation(rotation: Quat) -> Self {
        let (yaw, _pitch, _roll) = rotation.to_euler(EulerRot::YXZ);
        Self {
            yaw_degrees: yaw.to_degrees(),
            right: rotation * Vec3::X,
            forward: rotation * Vec3::Z,
        }
    }
}

impl CameraView for CameraFrame {
    fn yaw_degrees(&self) -> f32 {
        self.yaw_degrees
    }

    fn right(&self) -> Vec3 {
        self.right
    }

    fn forward(&self) -> Vec3 {
        self.forward
    }
}

/// Rig distance shared between the controller and any number of readers.
///
/// Clones observe the same value. Hand one clone to the controller, which is
/// the only writer, and keep the others for the camera rig.
///
/// # Examples
///
/// ```
/// use stride::{SharedZoomDistance, ZoomTarget};
///
/// let rig = SharedZoomDistance::new(5.0);
/// let mut writer = rig.clone();
/// writer.set_distance(6.5);
/// assert!((rig.get() - 6.5).abs() < f32::EPSILON);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedZoomDistance(Rc<Cell<f32>>);

impl SharedZoomDistance {
    /// Creates a shared distance starting at `distance`.
    #[must_use]
    pub fn new(distance: f32) -> Self {
        Self(Rc::new(Cell::new(distance)))
    }

    /// Reads the current distance.
    #[must_use]
    pub fn get(&self) -> f32 {
        self.0.get()
    }
}

impl ZoomTarget for SharedZoomDistance {
    fn distance(&self) -> f32 {
        self.get()
    }

    fn set_distance(&mut self, distance: f32) {
        self.0.set(distance);
    }
}

impl<T: CapsuleBody + ?Sized> CapsuleBody for Rc<RefCell<T>> {
    fn move_and_collide(&mut self, displacement: Vec3) {
        self.borrow_mut().move_and_collide(displacement);
    }

    fn is_grounded(&self) -> bool {
        self.borrow().is_grounded()
    }

    fn rotation(&self) -> Quat {
        self.borrow().rotation()
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.borrow_mut().set_rotation(rotation);
    }
}

impl<T: InputSource + ?Sized> InputSource for Rc<RefCell<T>> {
    fn read_frame(&mut self) -> FrameInputSnapshot {
        self.borrow_mut().read_frame()
    }
}

impl<T: CameraView + ?Sized> CameraView for Rc<RefCell<T>> {
    fn yaw_degrees(&self) -> f32 {
        self.borrow().yaw_degrees()
    }

    fn right(&self) -> Vec3 {
        self.borrow().right()
    }

    fn forward(&self) -> Vec3 {
        self.borrow().forward()
    }
}

impl<T: ZoomTarget + ?Sized> ZoomTarget for Rc<RefCell<T>> {
    fn distance(&self) -> f32 {
        self.borrow().distance()
    }

    fn set_distance(&mut self, distance: f32) {
        self.borrow_mut().set_distance(distance);
    }
}

impl<T: CursorControl + ?Sized> CursorControl for Rc<RefCell<T>> {
    fn apply_cursor(&mut self, state: CursorState) {
        self.borrow_mut().apply_cursor(state);
    }
}
