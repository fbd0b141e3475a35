//! Headless demo driving a character across flat ground.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use glam::Vec2;
use log::info;
use stride::sim::{HeadlessCursor, ScriptedInput};
use stride::{
    init_logging, CameraFrame, ControllerBuilder, ControllerConfig, FlatGroundCapsule,
    FrameInputSnapshot, SharedZoomDistance,
};

/// Third-person locomotion controller running a scripted walk, jump and zoom
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Log every frame
    #[arg(long)]
    trace: bool,

    /// JSON file overriding controller tuning
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Frames to simulate
    #[arg(short, long, default_value_t = 180)]
    frames: u32,

    /// Seconds per frame
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Camera yaw in degrees
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    camera_yaw: f32,

    /// Starting camera rig distance
    #[arg(long, default_value_t = 5.0)]
    zoom: f32,
}

fn load_config(path: Option<&PathBuf>) -> Result<ControllerConfig> {
    let Some(config_path) = path else {
        return Ok(ControllerConfig::default());
    };
    ControllerConfig::from_json_path(config_path)
        .with_context(|| format!("loading controller config from {}", config_path.display()))
}

/// Walks forward, jumps once, strafes, then zooms in and out.
fn demo_script() -> ScriptedInput {
    let forward = FrameInputSnapshot::moving(Vec2::new(0.0, 1.0));
    let diagonal = FrameInputSnapshot::moving(Vec2::new(1.0, 1.0));
    let jump = FrameInputSnapshot {
        jump_triggered: true,
        ..forward
    };
    ScriptedInput::default()
        .then_repeat(forward, 30)
        .then_repeat(jump, 1)
        .then_repeat(forward, 59)
        .then_repeat(diagonal, 30)
        .then_repeat(FrameInputSnapshot::scrolling(4.0), 3)
        .then_repeat(FrameInputSnapshot::scrolling(-2.0), 2)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose, args.trace);
    ensure!(
        args.dt.is_finite() && args.dt > 0.0,
        "--dt must be a positive number of seconds, got {}",
        args.dt
    );

    let config = load_config(args.config.as_ref())?;
    let capsule = Rc::new(RefCell::new(FlatGroundCapsule::default()));
    let rig = SharedZoomDistance::new(args.zoom);
    let cursor = Rc::new(RefCell::new(HeadlessCursor::default()));

    let mut controller = ControllerBuilder::new(config)
        .body(Rc::clone(&capsule))
        .input(demo_script())
        .camera(CameraFrame::from_yaw_degrees(args.camera_yaw))
        .zoom_target(rig.clone())
        .cursor(Rc::clone(&cursor))
        .build()
        .context("building character controller")?;

    let mut jumps = 0_u32;
    let mut landings = 0_u32;
    let mut peak = 0.0_f32;
    for _ in 0..args.frames {
        let report = controller.tick(args.dt);
        jumps += u32::from(report.jumped);
        landings += u32::from(report.landed);
        peak = peak.max(capsule.borrow().height_above_ground());
    }

    let body = capsule.borrow();
    info!(
        "simulated {} frames: position {:?}, peak height {peak:.3}, {jumps} jump(s), {landings} landing(s)",
        args.frames, body.position
    );
    info!(
        "rig distance {:.3}, cursor requests {}",
        rig.get(),
        cursor.borrow().requests
    );
    Ok(())
}
