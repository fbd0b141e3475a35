//! Rig distance bounds, inversion and trigger selection.

use approx::assert_relative_eq;
use rstest::{fixture, rstest};
use stride::{apply_zoom, zoom_trigger_value, ControllerConfig, FrameInputSnapshot, ZoomTrigger};

#[fixture]
fn config() -> ControllerConfig {
    ControllerConfig::default()
}

#[rstest]
fn distance_always_lands_in_range(config: ControllerConfig) {
    let starts = [-100.0, 0.0, 3.0, 5.5, 8.0, 250.0];
    let inputs = [-1000.0, -3.0, -0.01, 0.01, 1.0, 120.0];
    for current in starts {
        for input in inputs {
            let next = apply_zoom(current, input, &config).expect("nonzero input zooms");
            assert!(
                (config.min_zoom_distance..=config.max_zoom_distance).contains(&next),
                "{current} with input {input} escaped to {next}"
            );
        }
    }
}

#[rstest]
fn zero_follow_up_leaves_distance_unchanged(config: ControllerConfig) {
    for input in [-7.0, -0.5, 0.5, 7.0] {
        let once = apply_zoom(5.0, input, &config).expect("nonzero input zooms");
        assert_eq!(apply_zoom(once, 0.0, &config), None);
    }
}

#[rstest]
#[case::inward(0.5)]
#[case::outward(-0.5)]
fn inversion_changes_the_step_size(config: ControllerConfig, #[case] input: f32) {
    let start = 5.5;
    let normal = apply_zoom(start, input, &config).expect("nonzero input zooms");
    assert_relative_eq!(normal - start, -input / config.zoom_sensitivity_divisor, epsilon = 1e-6);

    let inverted = ControllerConfig {
        inverted_scroll: true,
        ..config
    };
    let raw = apply_zoom(start, input, &inverted).expect("nonzero input zooms");
    assert_relative_eq!(raw - start, -input, epsilon = 1e-6);
}

#[rstest]
#[case::wheel_ignores_axis(ZoomTrigger::ScrollWheel, 0.0)]
#[case::action_reads_axis(ZoomTrigger::ZoomAction, 2.0)]
fn trigger_decides_which_input_zooms(#[case] trigger: ZoomTrigger, #[case] expected: f32) {
    let gamepad_zoom = FrameInputSnapshot {
        zoom_axis: 2.0,
        ..FrameInputSnapshot::default()
    };
    assert_eq!(zoom_trigger_value(&gamepad_zoom, trigger), expected);
}

#[rstest]
fn out_of_range_rig_is_corrected_by_next_zoom(config: ControllerConfig) {
    let next = apply_zoom(20.0, 0.1, &config).expect("nonzero input zooms");
    assert_eq!(next, config.max_zoom_distance);
}
