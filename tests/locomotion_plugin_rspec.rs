//! Behavioural tests: the Bevy plugin walks, jumps and zooms a character.

#[path = "support/thread_safe_app.rs"]
mod thread_safe_app;

#[path = "support/rspec_runner.rs"]
mod rspec_runner;

use std::sync::MutexGuard;
use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rspec::block::Context as Scenario;
use rspec_runner::run_serial;
use stride::{
    CameraRig, ControllerConfig, ControllerState, FollowCamera, FrameInputSnapshot,
    KinematicCapsule, LocomotionInput, LocomotionPlugin, PlayerCharacter,
};
use thread_safe_app::{lock_app, share, SharedApp, ThreadSafeApp};

const FRAME: Duration = Duration::from_millis(16);
const START_DISTANCE: f32 = 5.0;

/// Fixture owning an app with one player and one follow camera.
#[derive(Debug, Clone)]
struct LocomotionFixture {
    app: SharedApp,
}

impl LocomotionFixture {
    /// Builds the app and runs the zero-length first frame.
    fn bootstrap() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
        app.add_plugins(LocomotionPlugin);
        app.world_mut().spawn(PlayerCharacter);
        app.world_mut().spawn((
            FollowCamera,
            CameraRig {
                target_distance: START_DISTANCE,
            },
        ));
        app.finish();
        app.cleanup();
        app.update();
        Self { app: share(app) }
    }

    fn app_guard(&self) -> MutexGuard<'_, ThreadSafeApp> {
        lock_app(&self.app)
    }

    fn tick(&self, frames: usize) {
        let mut app = self.app_guard();
        for _ in 0..frames {
            app.update();
        }
    }

    /// Puts the player back on the ground at the origin with no input.
    fn reset(&self) {
        let mut app = self.app_guard();
        let world = app.world_mut();
        world.resource_mut::<LocomotionInput>().0 = FrameInputSnapshot::default();
        let mut players = world.query_filtered::<(
            &mut Transform,
            &mut KinematicCapsule,
            &mut ControllerState,
        ), With<PlayerCharacter>>();
        for (mut transform, mut capsule, mut state) in players.iter_mut(world) {
            *transform = Transform::IDENTITY;
            capsule.grounded = true;
            state.vertical_velocity = 0.0;
        }
        let mut rigs = world.query::<&mut CameraRig>();
        for mut rig in rigs.iter_mut(world) {
            rig.target_distance = START_DISTANCE;
        }
    }

    fn set_input(&self, input: FrameInputSnapshot) {
        let mut app = self.app_guard();
        app.world_mut().resource_mut::<LocomotionInput>().0 = input;
    }

    fn player_translation(&self) -> Vec3 {
        let mut app = self.app_guard();
        let world = app.world_mut();
        let mut players = world.query_filtered::<&Transform, With<PlayerCharacter>>();
        players
            .single(world)
            .map(|transform| transform.translation)
            .unwrap_or_else(|e| panic!("expected one player: {e}"))
    }

    fn rig_distance(&self) -> f32 {
        let mut app = self.app_guard();
        let world = app.world_mut();
        let mut rigs = world.query::<&CameraRig>();
        rigs.single(world)
            .map(|rig| rig.target_distance)
            .unwrap_or_else(|e| panic!("expected one rig: {e}"))
    }
}

fn walking(scenario: &mut Scenario<LocomotionFixture>) {
    scenario.when("the forward axis is held for ten frames", |ctx| {
        ctx.before_each(|state| {
            state.reset();
            state.set_input(FrameInputSnapshot::moving(Vec2::new(0.0, 1.0)));
            state.tick(10);
        });

        ctx.then("the player advances along +Z and stays on the floor", |state| {
            let position = state.player_translation();
            let expected = ControllerConfig::default().move_speed * FRAME.as_secs_f32() * 10.0;
            assert!(
                (position.z - expected).abs() < 1e-3,
                "expected z near {expected}, got {position:?}"
            );
            assert_eq!(position.y, 0.0);
        });
    });
}

fn jumping(scenario: &mut Scenario<LocomotionFixture>) {
    scenario.when("jump is pressed on the ground", |ctx| {
        ctx.before_each(|state| {
            state.reset();
            state.set_input(FrameInputSnapshot::jumping());
            state.tick(5);
        });

        ctx.then("the player leaves the floor", |state| {
            let position = state.player_translation();
            assert!(position.y > 0.0, "expected lift-off, got {position:?}");
        });
    });
}

fn zooming(scenario: &mut Scenario<LocomotionFixture>) {
    scenario.when("the wheel scrolls far inward", |ctx| {
        ctx.before_each(|state| {
            state.reset();
            state.set_input(FrameInputSnapshot::scrolling(100.0));
            state.tick(1);
        });

        ctx.then("the rig stops at the minimum distance", |state| {
            let min = ControllerConfig::default().min_zoom_distance;
            assert_eq!(state.rig_distance(), min);
        });
    });
}

#[test]
fn locomotion_plugin_drives_ecs_character() {
    let fixture = LocomotionFixture::bootstrap();

    run_serial(&rspec::given(
        "a LocomotionPlugin app with a player and follow camera",
        fixture,
        |scenario: &mut Scenario<LocomotionFixture>| {
            walking(scenario);
            jumping(scenario);
            zooming(scenario);
        },
    ));
}
