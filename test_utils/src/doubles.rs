//! Collaborators that remember what the controller asked of them.

use glam::{Quat, Vec3};
use stride::{CapsuleBody, CursorControl, CursorState};

/// Capsule that records every sweep and reports a scripted grounded flag.
///
/// Sweeps are applied to `position` without collision, so the grounded flag
/// only changes when a test sets it.
#[derive(Debug, Clone, Default)]
pub struct RecordingCapsule {
    /// Sum of all sweeps.
    pub position: Vec3,
    /// Current facing.
    pub rotation: Quat,
    /// Value reported by [`CapsuleBody::is_grounded`].
    pub grounded: bool,
    /// Every displacement in call order.
    pub sweeps: Vec<Vec3>,
}

impl RecordingCapsule {
    /// Capsule resting on ground at the origin.
    ///
    /// # Examples
    /// ```
    /// use stride::CapsuleBody;
    /// use test_utils::RecordingCapsule;
    /// let capsule = RecordingCapsule::grounded();
    /// assert!(capsule.is_grounded());
    /// ```
    pub fn grounded() -> Self {
        Self {
            grounded: true,
            ..Self::default()
        }
    }

    /// Capsule in the air at the origin.
    pub fn airborne() -> Self {
        Self::default()
    }

    /// Sweeps recorded since the last call, clearing the log.
    pub fn take_sweeps(&mut self) -> Vec<Vec3> {
        std::mem::take(&mut self.sweeps)
    }
}

impl CapsuleBody for RecordingCapsule {
    fn move_and_collide(&mut self, displacement: Vec3) {
        self.position += displacement;
        self.sweeps.push(displacement);
    }

    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn rotation(&self) -> Quat {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }
}

/// Cursor sink keeping every request in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingCursor {
    /// Requests in call order.
    pub requests: Vec<CursorState>,
}

impl CursorControl for RecordingCursor {
    fn apply_cursor(&mut self, state: CursorState) {
        self.requests.push(state);
    }
}
