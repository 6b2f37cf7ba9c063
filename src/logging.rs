// src/logging.rs

//! Logging setup for `taskorder`.
//!
//! The filter comes from the `--log-level` flag when given, otherwise from
//! `TASKORDER_LOG` (any `EnvFilter` directive list, e.g.
//! `taskorder::dag=trace,warn`), otherwise `warn`. Output goes to stderr so
//! that stdout carries only the response.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::LogLevel;

/// Environment variable read when no `--log-level` flag is given.
pub const LOG_ENV: &str = "TASKORDER_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

/// Install the global subscriber. Call once at startup.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    fmt()
        .with_env_filter(env_filter(cli_level))
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(())
}

/// Resolve the filter: flag, then `TASKORDER_LOG`, then `warn`.
///
/// An unparsable `TASKORDER_LOG` falls back to the default.
pub fn env_filter(cli_level: Option<LogLevel>) -> EnvFilter {
    match cli_level {
        Some(level) => EnvFilter::new(level.as_directive()),
        None => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE)),
    }
}
