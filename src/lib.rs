#![cfg_attr(docsrs, feature(doc_cfg))]
//! Library crate providing a third-person character locomotion controller.
//!
//! The controller turns per-frame input into grounded movement, a
//! camera-relative heading, jump impulses, constant gravity and a clamped
//! camera zoom. It runs either standalone through [`CharacterController`]
//! with injected host collaborators, or inside a Bevy app through
//! [`LocomotionPlugin`].
pub mod config;
pub mod constants;
pub mod controller;
pub mod cursor;
pub mod error;
pub mod ground;
pub mod heading;
pub mod host;
pub mod input;
pub mod locomotion;
pub mod logging;
pub mod plugin;
pub mod sim;
pub mod state;
pub mod vertical;
pub mod zoom;

pub use constants::*;

// Re-export commonly used items
pub use config::{ConfigError, ControllerConfig};
pub use controller::{CharacterController, ControllerBuilder, FrameReport};
pub use cursor::{apply_cursor_policy, CursorState};
pub use error::{ControllerError, Dependency};
pub use ground::sense_ground;
pub use heading::{heading_target, step_heading};
pub use host::{
    CameraFrame, CameraView, CapsuleBody, CursorControl, InputSource, SharedZoomDistance,
    ZoomTarget,
};
pub use input::FrameInputSnapshot;
pub use locomotion::horizontal_displacement;
pub use logging::init as init_logging;
pub use plugin::{
    CameraRig, CursorRequest, FollowCamera, GroundPlane, KinematicCapsule, LocomotionInput,
    LocomotionPlugin, LocomotionSet, PlayerCharacter,
};
pub use sim::FlatGroundCapsule;
pub use state::ControllerState;
pub use vertical::{apply_jump, integrate_gravity, jump_launch_speed, predicted_apex_height};
pub use zoom::{apply_zoom, zoom_trigger_value, ZoomTrigger};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use stride::prelude::*;
    //! ```

    pub use crate::CameraFrame;
    pub use crate::CharacterController;
    pub use crate::ControllerBuilder;
    pub use crate::ControllerConfig;
    pub use crate::ControllerState;
    pub use crate::FrameInputSnapshot;
    pub use crate::LocomotionPlugin;
    pub use crate::SharedZoomDistance;
    pub use crate::ZoomTrigger;
}
