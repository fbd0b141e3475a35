//! Headless host collaborators.
//!
//! These stand in for an engine when the controller runs without one: the
//! demo binary, documentation examples and tests. The capsule resolves
//! against a single horizontal ground plane and nothing else.

use std::collections::VecDeque;

use glam::{Quat, Vec3};
use log::trace;

use crate::constants::GROUND_CONTACT_EPSILON;
use crate::cursor::CursorState;
use crate::host::{CapsuleBody, CursorControl, InputSource};
use crate::input::FrameInputSnapshot;

/// Pushes `position` back onto the plane at `ground_height` if it sank into
/// it. Returns whether the position now rests on the plane.
///
/// # Examples
///
/// ```
/// use glam::Vec3;
/// use stride::sim::resolve_flat_ground;
///
/// let mut position = Vec3::new(1.0, -0.2, 0.0);
/// assert!(resolve_flat_ground(&mut position, 0.0));
/// assert_eq!(position, Vec3::new(1.0, 0.0, 0.0));
/// ```
pub fn resolve_flat_ground(position: &mut Vec3, ground_height: f32) -> bool {
    if position.y <= ground_height + GROUND_CONTACT_EPSILON {
        position.y = ground_height;
        true
    } else {
        false
    }
}

/// Capsule sliding over an infinite flat floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatGroundCapsule {
    /// Foot position of the capsule.
    pub position: Vec3,
    /// Facing of the capsule.
    pub rotation: Quat,
    /// Height of the floor plane.
    pub ground_height: f32,
    grounded: bool,
}

impl Default for FlatGroundCapsule {
    fn default() -> Self {
        Self::at(Vec3::ZERO)
    }
}

impl FlatGroundCapsule {
    /// Capsule at `position` over a floor at height zero, already resolved
    /// against it.
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        let mut resolved = position;
        let grounded = resolve_flat_ground(&mut resolved, 0.0);
        Self {
            position: resolved,
            rotation: Quat::IDENTITY,
            ground_height: 0.0,
            grounded,
        }
    }

    /// Height of the capsule above the floor.
    #[must_use]
    pub fn height_above_ground(&self) -> f32 {
        self.position.y - self.ground_height
    }
}

impl CapsuleBody for FlatGroundCapsule {
    fn move_and_collide(&mut self, displacement: Vec3) {
        self.position += displacement;
        self.grounded = resolve_flat_ground(&mut self.position, self.ground_height);
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

/// Input source replaying a fixed list of frames, then idling.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<FrameInputSnapshot>,
    idle: FrameInputSnapshot,
}

impl ScriptedInput {
    /// Replays `frames` in order.
    #[must_use]
    pub fn new(frames: impl IntoIterator<Item = FrameInputSnapshot>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            idle: FrameInputSnapshot::default(),
        }
    }

    /// Appends `snapshot` to the script `count` times.
    #[must_use]
    pub fn then_repeat(mut self, snapshot: FrameInputSnapshot, count: usize) -> Self {
        self.frames.extend(std::iter::repeat(snapshot).take(count));
        self
    }

    /// Input reported once the script runs out.
    #[must_use]
    pub fn idling_with(mut self, idle: FrameInputSnapshot) -> Self {
        self.idle = idle;
        self
    }

    /// Frames left before the script runs out.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_frame(&mut self) -> FrameInputSnapshot {
        self.frames.pop_front().unwrap_or(self.idle)
    }
}

/// Cursor sink for hosts without a window. Records the last request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeadlessCursor {
    /// Most recent request, if any arrived.
    pub last: Option<CursorState>,
    /// Number of requests received.
    pub requests: u64,
}

impl CursorControl for HeadlessCursor {
    fn apply_cursor(&mut self, state: CursorState) {
        trace!("headless cursor request {state:?}");
        self.last = Some(state);
        self.requests += 1;
    }
}
