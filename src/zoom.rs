//! Camera rig distance driven by zoom input.

use serde::{Deserialize, Serialize};

use crate::config::ControllerConfig;
use crate::input::FrameInputSnapshot;

/// Which input value triggers and drives zooming.
///
/// `ScrollWheel` reads the raw wheel delta only, so rebinding the zoom action
/// to another device has no effect. `ZoomAction` reads the generic zoom
/// action and therefore follows whatever the backend binds to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoomTrigger {
    /// Literal mouse wheel delta.
    #[default]
    ScrollWheel,
    /// Generic zoom action magnitude.
    ZoomAction,
}

/// Picks the zoom input for this frame according to `trigger`.
#[must_use]
pub const fn zoom_trigger_value(input: &FrameInputSnapshot, trigger: ZoomTrigger) -> f32 {
    match trigger {
        ZoomTrigger::ScrollWheel => input.scroll_delta,
        ZoomTrigger::ZoomAction => input.zoom_axis,
    }
}

/// Computes the next rig distance, or `None` when `input` is zero.
///
/// A zero input skips the step entirely rather than re-clamping the current
/// distance. Otherwise the input is divided by the sensitivity divisor unless
/// `inverted_scroll` is set, subtracted from `current`, and bounded to
/// `[min_zoom_distance, max_zoom_distance]`. The bound is applied with
/// `max`/`min` so a NaN result lands on the lower bound instead of escaping
/// the range.
///
/// # Examples
///
/// ```
/// use stride::{apply_zoom, ControllerConfig};
///
/// let config = ControllerConfig::default();
/// assert_eq!(apply_zoom(5.0, 0.0, &config), None);
/// assert_eq!(apply_zoom(5.0, 1.0, &config), Some(5.0 - 1.0 / 5.0));
/// assert_eq!(apply_zoom(5.0, 100.0, &config), Some(3.0));
/// ```
#[must_use]
pub fn apply_zoom(current: f32, input: f32, config: &ControllerConfig) -> Option<f32> {
    if input == 0.0 {
        return None;
    }
    let delta = if config.inverted_scroll {
        input
    } else {
        input / config.zoom_sensitivity_divisor
    };
    Some(
        (current - delta)
            .max(config.min_zoom_distance)
            .min(config.max_zoom_distance),
    )
}
