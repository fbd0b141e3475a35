//! Logger setup for the demo binary and tests.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Default level used when `RUST_LOG` is unset.
///
/// `verbose` raises the floor to debug so landings and jumps are reported;
/// `trace_frames` raises it further to trace so every frame is logged.
#[must_use]
pub const fn default_level(verbose: bool, trace_frames: bool) -> LevelFilter {
    match (verbose, trace_frames) {
        (_, true) => LevelFilter::Trace,
        (true, false) => LevelFilter::Debug,
        (false, false) => LevelFilter::Info,
    }
}

/// Initializes the global logger.
///
/// `RUST_LOG` still wins over the default derived from the flags, so
/// `RUST_LOG=stride::controller=trace` narrows per-frame output to the
/// pipeline.
pub fn init(verbose: bool, trace_frames: bool) {
    let level = default_level(verbose, trace_frames);
    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);
    builder.format_timestamp_millis();

    // `try_init` only fails if a logger was already set. Ignore that case so
    // tests can call `init` multiple times without panicking.
    let _ = builder.try_init();
}
