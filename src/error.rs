//! Errors surfaced while constructing a [`crate::CharacterController`].
//!
//! The per-frame pipeline itself never fails; everything that can go wrong is
//! caught here, at initialisation.

use thiserror::Error;

use crate::config::ConfigError;

/// Host collaborator the controller cannot run without.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dependency {
    /// Capsule body providing move-and-collide and grounded status.
    CapsuleBody,
    /// Source of per-frame input snapshots.
    Input,
    /// Camera providing yaw and basis vectors.
    Camera,
    /// Camera rig distance written by the zoom step.
    ZoomTarget,
    /// Windowing layer accepting cursor lock and visibility requests.
    Cursor,
}

/// Failure raised by [`crate::ControllerBuilder::build`].
#[derive(Debug, Error)]
pub enum ControllerError {
    /// A required collaborator was not supplied.
    #[error("controller is missing its {0:?} dependency")]
    MissingDependency(Dependency),
    /// The supplied configuration breaks an invariant.
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}
