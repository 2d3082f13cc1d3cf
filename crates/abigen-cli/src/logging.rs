//! Diagnostic logging to stderr.
//!
//! `RUST_LOG` takes precedence; otherwise `-v` raises the level from `warn`
//! to `info` and `-vv` to `debug`.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        })
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}
