//! Frame pipeline behaviour observed through recording collaborators.

use std::cell::RefCell;
use std::rc::Rc;

use glam::{Vec2, Vec3};
use rstest::{fixture, rstest};
use stride::sim::ScriptedInput;
use stride::{
    CameraFrame, CharacterController, ControllerBuilder, ControllerConfig, CursorState,
    FrameInputSnapshot, SharedZoomDistance,
};
use test_utils::{assert_vec3_near, shared, RecordingCapsule, RecordingCursor};

const FRAME: f32 = 1.0 / 60.0;

struct Rig {
    controller: CharacterController,
    capsule: Rc<RefCell<RecordingCapsule>>,
    cursor: Rc<RefCell<RecordingCursor>>,
    zoom: SharedZoomDistance,
}

fn rig_with(capsule: RecordingCapsule, input: ScriptedInput, camera_yaw: f32) -> Rig {
    let capsule = shared(capsule);
    let cursor = shared(RecordingCursor::default());
    let zoom = SharedZoomDistance::new(5.0);
    let controller = ControllerBuilder::new(ControllerConfig::default())
        .body(Rc::clone(&capsule))
        .input(input)
        .camera(CameraFrame::from_yaw_degrees(camera_yaw))
        .zoom_target(zoom.clone())
        .cursor(Rc::clone(&cursor))
        .build()
        .expect("all collaborators supplied");
    Rig {
        controller,
        capsule,
        cursor,
        zoom,
    }
}

#[fixture]
fn forward_walk() -> Rig {
    rig_with(
        RecordingCapsule::grounded(),
        ScriptedInput::default().idling_with(FrameInputSnapshot::moving(Vec2::new(0.0, 1.0))),
        0.0,
    )
}

#[rstest]
fn forward_input_moves_along_player_forward(mut forward_walk: Rig) {
    let report = forward_walk.controller.tick(FRAME);
    assert_vec3_near(report.horizontal, Vec3::new(0.0, 0.0, 2.0 / 60.0), 1e-6);
    let sweeps = forward_walk.capsule.borrow_mut().take_sweeps();
    assert_eq!(sweeps.len(), 2);
    assert_vec3_near(sweeps[0], report.horizontal, 1e-6);
    assert_eq!(sweeps[1].x, 0.0);
    assert_eq!(sweeps[1].z, 0.0);
}

#[rstest]
fn every_processed_frame_sweeps_twice_and_captures_cursor(mut forward_walk: Rig) {
    for _ in 0..5 {
        forward_walk.controller.tick(FRAME);
    }
    forward_walk.controller.tick(0.0);
    assert_eq!(forward_walk.capsule.borrow().sweeps.len(), 10);
    let cursor = forward_walk.cursor.borrow();
    assert_eq!(cursor.requests.len(), 5);
    assert!(cursor.requests.iter().all(|state| *state == CursorState::CAPTURED));
}

#[test]
fn landing_clears_downward_velocity() {
    let mut rig = rig_with(RecordingCapsule::airborne(), ScriptedInput::default(), 0.0);
    for _ in 0..10 {
        rig.controller.tick(FRAME);
    }
    assert!(rig.controller.state().vertical_velocity < 0.0);

    rig.capsule.borrow_mut().grounded = true;
    let report = rig.controller.tick(FRAME);
    assert!(report.landed);
    // Gravity runs after the reset, so only one frame of fall remains.
    let one_frame = ControllerConfig::default().effective_gravity() * FRAME;
    assert!((rig.controller.state().vertical_velocity - one_frame).abs() < 1e-6);
}

#[test]
fn airborne_jump_is_ignored() {
    let mut rig = rig_with(
        RecordingCapsule::airborne(),
        ScriptedInput::new([FrameInputSnapshot::default(), FrameInputSnapshot::jumping()]),
        0.0,
    );
    rig.controller.tick(FRAME);
    let before = rig.controller.state().vertical_velocity;
    let report = rig.controller.tick(FRAME);
    assert!(!report.jumped);
    let gravity_only = before + ControllerConfig::default().effective_gravity() * FRAME;
    assert!((rig.controller.state().vertical_velocity - gravity_only).abs() < 1e-6);
}

#[test]
fn grounded_jump_launches_this_frame() {
    let mut rig = rig_with(
        RecordingCapsule::grounded(),
        ScriptedInput::new([FrameInputSnapshot::jumping()]),
        0.0,
    );
    let report = rig.controller.tick(FRAME);
    assert!(report.jumped);
    assert!(report.vertical.y > 0.0);
}

#[test]
fn scroll_updates_the_shared_rig_distance() {
    let mut rig = rig_with(
        RecordingCapsule::grounded(),
        ScriptedInput::new([FrameInputSnapshot::scrolling(1.0)]),
        0.0,
    );
    let report = rig.controller.tick(FRAME);
    assert_eq!(report.zoom_distance, Some(rig.zoom.get()));
    assert!((rig.zoom.get() - 4.8).abs() < 1e-6);
    assert!((rig.controller.zoom_distance() - 4.8).abs() < 1e-6);

    let idle = rig.controller.tick(FRAME);
    assert_eq!(idle.zoom_distance, None);
    assert!((rig.zoom.get() - 4.8).abs() < 1e-6);
}

#[test]
fn heading_turns_toward_camera_yaw() {
    let mut rig = rig_with(RecordingCapsule::grounded(), ScriptedInput::default(), 90.0);
    for _ in 0..120 {
        rig.controller.tick(FRAME);
    }
    let yaw = test_utils::yaw_degrees_of(rig.capsule.borrow().rotation);
    assert!((yaw - 90.0).abs() < 0.5, "yaw {yaw} should approach 90");
}
