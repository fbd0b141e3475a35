//! The per-frame locomotion pipeline with injected host collaborators.
//!
//! [`ControllerBuilder`] resolves every collaborator eagerly, so a controller
//! that exists can always run a full frame. [`CharacterController::tick`]
//! then runs the steps in a fixed order:
//!
//! 1. cursor policy
//! 2. ground sensing (landing reset)
//! 3. horizontal locomotion
//! 4. heading
//! 5. jump
//! 6. gravity
//! 7. zoom, when the trigger input is nonzero
//!
//! Ground sensing precedes jump and gravity so both see the corrected
//! accumulator; jump precedes gravity so the impulse moves the capsule in
//! the frame it fires.

use std::fmt;

use glam::Vec3;
use log::{debug, trace, warn};

use crate::config::ControllerConfig;
use crate::cursor::apply_cursor_policy;
use crate::error::{ControllerError, Dependency};
use crate::ground::sense_ground;
use crate::heading::step_heading;
use crate::host::{CameraView, CapsuleBody, CursorControl, InputSource, ZoomTarget};
use crate::locomotion::horizontal_displacement;
use crate::state::ControllerState;
use crate::vertical::{apply_jump, integrate_gravity};
use crate::zoom::{apply_zoom, zoom_trigger_value};

/// Summary of what one call to [`CharacterController::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameReport {
    /// The frame was dropped because its delta time was unusable.
    pub skipped: bool,
    /// Ground sensing cleared a downward velocity.
    pub landed: bool,
    /// A jump impulse was applied.
    pub jumped: bool,
    /// Displacement issued by the locomotion step.
    pub horizontal: Vec3,
    /// Displacement issued by the gravity step.
    pub vertical: Vec3,
    /// Rig distance written by the zoom step, if it ran.
    pub zoom_distance: Option<f32>,
}

impl FrameReport {
    const fn skipped() -> Self {
        Self {
            skipped: true,
            landed: false,
            jumped: false,
            horizontal: Vec3::ZERO,
            vertical: Vec3::ZERO,
            zoom_distance: None,
        }
    }
}

/// Collects configuration and collaborators for a [`CharacterController`].
///
/// # Examples
///
/// ```
/// use stride::prelude::*;
/// use stride::sim::{HeadlessCursor, ScriptedInput};
/// use stride::FlatGroundCapsule;
///
/// let rig = SharedZoomDistance::new(5.0);
/// let mut controller = ControllerBuilder::new(ControllerConfig::default())
///     .body(FlatGroundCapsule::default())
///     .input(ScriptedInput::default())
///     .camera(CameraFrame::from_yaw_degrees(0.0))
///     .zoom_target(rig.clone())
///     .cursor(HeadlessCursor::default())
///     .build()
///     .unwrap();
///
/// let report = controller.tick(1.0 / 60.0);
/// assert!(!report.skipped);
/// ```
#[derive(Default)]
pub struct ControllerBuilder {
    config: ControllerConfig,
    body: Option<Box<dyn CapsuleBody>>,
    input: Option<Box<dyn InputSource>>,
    camera: Option<Box<dyn CameraView>>,
    zoom_target: Option<Box<dyn ZoomTarget>>,
    cursor: Option<Box<dyn CursorControl>>,
}

impl fmt::Debug for ControllerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControllerBuilder")
            .field("config", &self.config)
            .field("body", &self.body.is_some())
            .field("input", &self.input.is_some())
            .field("camera", &self.camera.is_some())
            .field("zoom_target", &self.zoom_target.is_some())
            .field("cursor", &self.cursor.is_some())
            .finish()
    }
}

impl ControllerBuilder {
    /// Starts a builder for `config` with no collaborators.
    #[must_use]
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Sets the capsule body moved by the controller.
    #[must_use]
    pub fn body(mut self, body: impl CapsuleBody + 'static) -> Self {
        self.body = Some(Box::new(body));
        self
    }

    /// Sets the input source sampled each frame.
    #[must_use]
    pub fn input(mut self, input: impl InputSource + 'static) -> Self {
        self.input = Some(Box::new(input));
        self
    }

    /// Sets the camera movement is resolved against.
    #[must_use]
    pub fn camera(mut self, camera: impl CameraView + 'static) -> Self {
        self.camera = Some(Box::new(camera));
        self
    }

    /// Sets the rig distance written by the zoom step.
    #[must_use]
    pub fn zoom_target(mut self, zoom_target: impl ZoomTarget + 'static) -> Self {
        self.zoom_target = Some(Box::new(zoom_target));
        self
    }

    /// Sets the windowing layer receiving cursor requests.
    #[must_use]
    pub fn cursor(mut self, cursor: impl CursorControl + 'static) -> Self {
        self.cursor = Some(Box::new(cursor));
        self
    }

    /// Validates the configuration and assembles the controller.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::InvalidConfig`] when the configuration
    /// fails [`ControllerConfig::validate`] and
    /// [`ControllerError::MissingDependency`] for the first collaborator that
    /// was never supplied.
    pub fn build(self) -> Result<CharacterController, ControllerError> {
        self.config.validate()?;
        let body = self
            .body
            .ok_or(ControllerError::MissingDependency(Dependency::CapsuleBody))?;
        let input = self
            .input
            .ok_or(ControllerError::MissingDependency(Dependency::Input))?;
        let camera = self
            .camera
            .ok_or(ControllerError::MissingDependency(Dependency::Camera))?;
        let zoom_target = self
            .zoom_target
            .ok_or(ControllerError::MissingDependency(Dependency::ZoomTarget))?;
        let cursor = self
            .cursor
            .ok_or(ControllerError::MissingDependency(Dependency::Cursor))?;

        debug!(
            "character controller ready: move_speed={} zoom=[{}, {}] trigger={:?}",
            self.config.move_speed,
            self.config.min_zoom_distance,
            self.config.max_zoom_distance,
            self.config.zoom_trigger
        );

        Ok(CharacterController {
            state: ControllerState::new(&self.config),
            config: self.config,
            body,
            input,
            camera,
            zoom_target,
            cursor,
        })
    }
}

/// Third-person locomotion controller for one character.
///
/// Owns its [`ControllerState`] exclusively. The zoom target is the only
/// collaborator it writes that others may read; the controller is its single
/// writer.
pub struct CharacterController {
    config: ControllerConfig,
    state: ControllerState,
    body: Box<dyn CapsuleBody>,
    input: Box<dyn InputSource>,
    camera: Box<dyn CameraView>,
    zoom_target: Box<dyn ZoomTarget>,
    cursor: Box<dyn CursorControl>,
}

impl fmt::Debug for CharacterController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharacterController")
            .field("config", &self.config)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl CharacterController {
    /// Configuration the controller was built with.
    #[must_use]
    pub const fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Current controller state.
    #[must_use]
    pub const fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Overrides the horizontal speed, e.g. while sprinting.
    pub fn set_current_move_speed(&mut self, speed: f32) {
        self.state.current_move_speed = speed;
    }

    /// Restores the configured horizontal speed.
    pub fn reset_move_speed(&mut self) {
        self.state.current_move_speed = self.config.move_speed;
    }

    /// Rig distance as currently stored in the zoom target.
    #[must_use]
    pub fn zoom_distance(&self) -> f32 {
        self.zoom_target.distance()
    }

    /// Runs one frame of the pipeline.
    ///
    /// A non-positive or non-finite `delta_seconds` drops the whole frame:
    /// no collaborator is touched and the report is marked `skipped`.
    pub fn tick(&mut self, delta_seconds: f32) -> FrameReport {
        if !(delta_seconds.is_finite() && delta_seconds > 0.0) {
            warn!("skipping locomotion frame with delta {delta_seconds}");
            return FrameReport::skipped();
        }

        let input = self.input.read_frame();

        apply_cursor_policy(self.cursor.as_mut());

        let landed = sense_ground(&mut self.state, self.body.is_grounded());
        if landed {
            debug!("landed; vertical velocity reset");
        }

        let player_forward = self.body.rotation() * Vec3::Z;
        let horizontal = horizontal_displacement(
            input.move_axis,
            self.camera.right(),
            player_forward,
            self.state.current_move_speed,
            delta_seconds,
        );
        self.body.move_and_collide(horizontal);

        let facing = step_heading(
            self.body.rotation(),
            self.camera.yaw_degrees(),
            self.config.rotation_lerp_rate,
            delta_seconds,
        );
        self.body.set_rotation(facing);

        let jumped = apply_jump(&mut self.state, input.jump_triggered, &self.config);
        if jumped {
            debug!("jump fired at {}", self.state.vertical_velocity);
        }

        let vertical = integrate_gravity(&mut self.state, &self.config, delta_seconds);
        self.body.move_and_collide(vertical);

        let zoom_input = zoom_trigger_value(&input, self.config.zoom_trigger);
        let zoom_distance = apply_zoom(self.zoom_target.distance(), zoom_input, &self.config);
        if let Some(distance) = zoom_distance {
            self.zoom_target.set_distance(distance);
            trace!("zoom input {zoom_input} moved rig to {distance}");
        }

        trace!(
            "frame dt={delta_seconds} horizontal={horizontal:?} vertical={vertical:?} grounded={}",
            self.state.is_grounded
        );

        FrameReport {
            skipped: false,
            landed,
            jumped,
            horizontal,
            vertical,
            zoom_distance,
        }
    }
}
