//! Per-frame input values read from the host input backend.

use glam::Vec2;

/// Input sampled once at the start of a frame.
///
/// The backend is expected to debounce and normalise values: each
/// `move_axis` component lies in `[-1, 1]` and `jump_triggered` is true only
/// on the frame the action fired.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInputSnapshot {
    /// Strafe (`x`) and forward (`y`) intent.
    pub move_axis: Vec2,
    /// Rising edge of the jump action.
    pub jump_triggered: bool,
    /// Raw scroll-wheel delta; zero when the wheel did not move.
    pub scroll_delta: f32,
    /// Value of the generic zoom action, whatever device it is bound to.
    pub zoom_axis: f32,
    /// Reserved for a crouch stance; no step reads it yet.
    pub crouch_requested: bool,
}

impl FrameInputSnapshot {
    /// Snapshot with only a movement axis set.
    #[must_use]
    pub const fn moving(move_axis: Vec2) -> Self {
        Self {
            move_axis,
            jump_triggered: false,
            scroll_delta: 0.0,
            zoom_axis: 0.0,
            crouch_requested: false,
        }
    }

    /// Snapshot with only the jump edge set.
    #[must_use]
    pub const fn jumping() -> Self {
        Self {
            move_axis: Vec2::ZERO,
            jump_triggered: true,
            scroll_delta: 0.0,
            zoom_axis: 0.0,
            crouch_requested: false,
        }
    }

    /// Snapshot with a wheel movement mirrored onto the zoom action, as a
    /// backend binding the wheel to zoom would report it.
    #[must_use]
    pub const fn scrolling(delta: f32) -> Self {
        Self {
            move_axis: Vec2::ZERO,
            jump_triggered: false,
            scroll_delta: delta,
            zoom_axis: delta,
            crouch_requested: false,
        }
    }
}
