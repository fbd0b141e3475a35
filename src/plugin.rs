//! Bevy plugin running the locomotion pipeline on ECS data.
//!
//! `LocomotionPlugin` maps the host collaborators onto components and
//! resources:
//!
//! - the capsule body is the player's [`Transform`] plus a
//!   [`KinematicCapsule`], resolved against a flat [`GroundPlane`];
//! - input arrives through the [`LocomotionInput`] resource, which the host
//!   input layer fills each frame;
//! - the camera is the single entity tagged [`FollowCamera`], whose
//!   [`CameraRig`] holds the zoom distance;
//! - cursor requests land in the [`CursorRequest`] resource for the
//!   windowing layer to apply.
//!
//! The steps are chained inside [`LocomotionSet`] so the ECS schedule keeps
//! the same order as [`crate::CharacterController::tick`]. The whole set is
//! skipped on frames without elapsed time, while the [`ControllerConfig`]
//! resource fails validation, and unless exactly one [`FollowCamera`] exists.

use bevy::prelude::*;
use log::{debug, error, warn};

use crate::config::ControllerConfig;
use crate::constants::DEFAULT_MIN_ZOOM_DISTANCE;
use crate::cursor::{apply_cursor_policy, CursorState};
use crate::ground::sense_ground;
use crate::heading::step_heading;
use crate::host::{CameraFrame, CursorControl};
use crate::input::FrameInputSnapshot;
use crate::locomotion::horizontal_displacement;
use crate::sim::resolve_flat_ground;
use crate::state::ControllerState;
use crate::vertical::{apply_jump, integrate_gravity};
use crate::zoom::{apply_zoom, zoom_trigger_value};

/// Marker for the character driven by the plugin.
///
/// Spawning it pulls in a [`Transform`] and a [`KinematicCapsule`]; a
/// [`ControllerState`] seeded from the current [`ControllerConfig`] is
/// attached on the next frame.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
#[require(Transform, KinematicCapsule)]
pub struct PlayerCharacter;

/// Grounded flag maintained by the plugin's flat-ground capsule sweep.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct KinematicCapsule {
    /// Whether the last sweep ended on the ground plane.
    pub grounded: bool,
}

/// Marker for the camera the movement is resolved against.
///
/// Exactly one may exist; the pipeline does not run otherwise.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
#[require(Transform, CameraRig)]
pub struct FollowCamera;

/// Distance parameter of the follow camera rig.
///
/// Only the zoom step writes it; rig systems read it to place the camera.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Component, Default)]
pub struct CameraRig {
    /// Distance from the character the rig renders at.
    pub target_distance: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            target_distance: DEFAULT_MIN_ZOOM_DISTANCE,
        }
    }
}

/// Horizontal floor every capsule resolves against.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct GroundPlane {
    /// World height of the floor.
    pub height: f32,
}

/// Input for the current frame, written by the host input layer.
///
/// Edge-triggered values (`jump_triggered`, `scroll_delta`, `zoom_axis`) are
/// cleared once the pipeline has consumed them.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct LocomotionInput(pub FrameInputSnapshot);

/// Cursor state requested by the pipeline for the windowing layer.
///
/// Starts released; the first processed frame captures the pointer.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorRequest(pub CursorState);

impl Default for CursorRequest {
    fn default() -> Self {
        Self(CursorState::RELEASED)
    }
}

impl CursorControl for CursorRequest {
    fn apply_cursor(&mut self, state: CursorState) {
        self.0 = state;
    }
}

/// System set containing the chained locomotion steps.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocomotionSet;

/// Plugin installing the locomotion pipeline.
///
/// # Examples
///
/// ```ignore
/// use bevy::prelude::*;
/// use stride::{ControllerConfig, LocomotionPlugin};
///
/// App::new()
///     .add_plugins(MinimalPlugins)
///     .insert_resource(ControllerConfig::default())
///     .add_plugins(LocomotionPlugin)
///     .run();
/// ```
#[derive(Debug, Default)]
pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<PlayerCharacter>();
        app.register_type::<KinematicCapsule>();
        app.register_type::<FollowCamera>();
        app.register_type::<CameraRig>();
        app.register_type::<ControllerState>();

        app.init_resource::<ControllerConfig>();
        app.init_resource::<GroundPlane>();
        app.init_resource::<LocomotionInput>();
        app.init_resource::<CursorRequest>();

        app.configure_sets(
            Update,
            LocomotionSet
                .run_if(frame_has_elapsed)
                .run_if(config_is_valid)
                .run_if(single_follow_camera),
        );
        app.add_systems(PreUpdate, attach_controller_state);
        app.add_systems(
            Update,
            (
                cursor_policy_system,
                ground_sensor_system,
                locomotion_system,
                heading_system,
                jump_system,
                gravity_system,
                zoom_system,
                consume_frame_input,
            )
                .chain()
                .in_set(LocomotionSet),
        );
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
fn frame_has_elapsed(time: Res<Time>) -> bool {
    time.delta_secs() > 0.0
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
fn config_is_valid(config: Res<ControllerConfig>, mut logged: Local<bool>) -> bool {
    if config.is_changed() {
        *logged = false;
    }
    match config.validate() {
        Ok(()) => true,
        Err(err) => {
            if !*logged {
                error!("locomotion disabled by invalid controller config: {err}");
                *logged = true;
            }
            false
        }
    }
}

fn single_follow_camera(
    cameras: Query<(), With<FollowCamera>>,
    mut warned: Local<bool>,
) -> bool {
    let count = cameras.iter().count();
    if count == 1 {
        *warned = false;
        return true;
    }
    if !*warned {
        warn!("locomotion paused: expected one FollowCamera, found {count}");
        *warned = true;
    }
    false
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
fn attach_controller_state(
    mut commands: Commands,
    config: Res<ControllerConfig>,
    players: Query<Entity, (With<PlayerCharacter>, Without<ControllerState>)>,
) {
    for entity in &players {
        debug!("attaching controller state to {entity:?}");
        commands
            .entity(entity)
            .insert(ControllerState::new(&config));
    }
}

fn cursor_policy_system(mut request: ResMut<CursorRequest>) {
    apply_cursor_policy(&mut *request);
}

fn ground_sensor_system(
    mut players: Query<(&KinematicCapsule, &mut ControllerState), With<PlayerCharacter>>,
) {
    for (capsule, mut state) in &mut players {
        if sense_ground(&mut state, capsule.grounded) {
            debug!("landed; vertical velocity reset");
        }
    }
}

/// Sweeps a capsule against the ground plane.
fn sweep(
    transform: &mut Transform,
    capsule: &mut KinematicCapsule,
    displacement: Vec3,
    ground: GroundPlane,
) {
    transform.translation += displacement;
    capsule.grounded = resolve_flat_ground(&mut transform.translation, ground.height);
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
#[expect(
    clippy::type_complexity,
    reason = "Disjoint camera and player queries need explicit filters."
)]
fn locomotion_system(
    time: Res<Time>,
    input: Res<LocomotionInput>,
    ground: Res<GroundPlane>,
    cameras: Query<&Transform, (With<FollowCamera>, Without<PlayerCharacter>)>,
    mut players: Query<
        (&mut Transform, &mut KinematicCapsule, &ControllerState),
        (With<PlayerCharacter>, Without<FollowCamera>),
    >,
) {
    let Ok(camera) = cameras.single() else {
        return;
    };
    let frame = CameraFrame::from_rotation(camera.rotation);
    let delta = time.delta_secs();
    for (mut transform, mut capsule, state) in &mut players {
        let forward = transform.rotation * Vec3::Z;
        let step = horizontal_displacement(
            input.0.move_axis,
            frame.right,
            forward,
            state.current_move_speed,
            delta,
        );
        sweep(&mut transform, &mut capsule, step, *ground);
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
fn heading_system(
    time: Res<Time>,
    config: Res<ControllerConfig>,
    cameras: Query<&Transform, (With<FollowCamera>, Without<PlayerCharacter>)>,
    mut players: Query<&mut Transform, (With<PlayerCharacter>, Without<FollowCamera>)>,
) {
    let Ok(camera) = cameras.single() else {
        return;
    };
    let frame = CameraFrame::from_rotation(camera.rotation);
    for mut transform in &mut players {
        transform.rotation = step_heading(
            transform.rotation,
            frame.yaw_degrees,
            config.rotation_lerp_rate,
            time.delta_secs(),
        );
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
fn jump_system(
    input: Res<LocomotionInput>,
    config: Res<ControllerConfig>,
    mut players: Query<&mut ControllerState, With<PlayerCharacter>>,
) {
    for mut state in &mut players {
        if apply_jump(&mut state, input.0.jump_triggered, &config) {
            debug!("jump fired at {}", state.vertical_velocity);
        }
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
fn gravity_system(
    time: Res<Time>,
    config: Res<ControllerConfig>,
    ground: Res<GroundPlane>,
    mut players: Query<
        (&mut Transform, &mut KinematicCapsule, &mut ControllerState),
        With<PlayerCharacter>,
    >,
) {
    let delta = time.delta_secs();
    for (mut transform, mut capsule, mut state) in &mut players {
        let step = integrate_gravity(&mut state, &config, delta);
        sweep(&mut transform, &mut capsule, step, *ground);
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
fn zoom_system(
    input: Res<LocomotionInput>,
    config: Res<ControllerConfig>,
    mut rigs: Query<&mut CameraRig, With<FollowCamera>>,
) {
    let Ok(mut rig) = rigs.single_mut() else {
        return;
    };
    let value = zoom_trigger_value(&input.0, config.zoom_trigger);
    if let Some(distance) = apply_zoom(rig.target_distance, value, &config) {
        rig.target_distance = distance;
    }
}

fn consume_frame_input(mut input: ResMut<LocomotionInput>) {
    input.0.jump_triggered = false;
    input.0.scroll_delta = 0.0;
    input.0.zoom_axis = 0.0;
}
