//! Pointer capture requested every frame.

use crate::host::CursorControl;

/// Pointer lock and visibility pair sent to the windowing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorState {
    /// Pointer confined to the window.
    pub locked: bool,
    /// Pointer drawn on screen.
    pub visible: bool,
}

impl CursorState {
    /// Locked and hidden, as a mouse-look camera needs.
    pub const CAPTURED: Self = Self {
        locked: true,
        visible: false,
    };

    /// Free and visible.
    pub const RELEASED: Self = Self {
        locked: false,
        visible: true,
    };
}

/// Requests a captured pointer.
///
/// The request is unconditional and idempotent; calling it every frame is
/// how the controller keeps the pointer captured after focus changes.
pub fn apply_cursor_policy(cursor: &mut dyn CursorControl) {
    cursor.apply_cursor(CursorState::CAPTURED);
}
