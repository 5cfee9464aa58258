//! Diagnostic logging setup
//!
//! All diagnostics go to stderr so the bundle on stdout stays clean.

use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

/// Install the global subscriber. `debug` enables the per-file trace.
pub fn init(debug: bool) {
    let level = if debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    // A subscriber may already be installed (e.g. in tests); keep it.
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
