//! Tracing subscriber setup.
//!
//! Events go to stdout, uncoloured and without timestamps (the runner adds
//! its own), so the runner's secret masking applies to every line.

use anyhow::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Set to `1` by the runner when step debug logging is enabled.
const RUNNER_DEBUG: &str = "RUNNER_DEBUG";

/// Default filter when `RUST_LOG` is not set.
fn default_directive(runner_debug: Option<&str>) -> &'static str {
    match runner_debug {
        Some("1") => "debug",
        _ => "info",
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the default level.
pub fn init() -> anyhow::Result<()> {
    let runner_debug = std::env::var(RUNNER_DEBUG).ok();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(runner_debug.as_deref())));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stdout)
                .with_ansi(false)
                .with_target(false)
                .without_time(),
        )
        .try_init()
        .context("failed to install tracing subscriber")
}
