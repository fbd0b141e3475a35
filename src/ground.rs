//! Grounded status and the landing reset.

use crate::state::ControllerState;

/// Stores the host grounded flag and clears downward velocity on ground.
///
/// Without the reset the accumulator would keep growing more negative while
/// the character rests on the floor. Must run before the jump and gravity
/// steps of the same frame. Returns `true` when a reset happened.
///
/// # Examples
///
/// ```
/// use stride::{sense_ground, ControllerState};
///
/// let mut state = ControllerState { vertical_velocity: -3.0, ..Default::default() };
/// assert!(sense_ground(&mut state, true));
/// assert_eq!(state.vertical_velocity, 0.0);
/// assert!(state.is_grounded);
/// ```
pub fn sense_ground(state: &mut ControllerState, grounded: bool) -> bool {
    state.is_grounded = grounded;
    if grounded && state.vertical_velocity < 0.0 {
        state.vertical_velocity = 0.0;
        return true;
    }
    false
}
