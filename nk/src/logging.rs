//! Diagnostics for `nk`.
//!
//! Everything here writes to stderr. Stdout is reserved for the seeds, keys
//! and signatures a command produces, which are usually redirected straight
//! into files.
//!
//! The default filter is `warn`, so a normal run prints nothing but its
//! result. The `info` event from `gen` (role and public key, never the seed)
//! and the `debug` events from the nkeys library only appear when asked for
//! through `--log-level` or `RUST_LOG`.

use anyhow::{Context, Result};
use clap::ValueEnum;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Shape of the diagnostic lines on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Compact lines for a person at a terminal.
    Pretty,
    /// One JSON object per event, for scripts that wrap `nk`.
    Json,
}

/// `RUST_LOG` wins over `--log-level` when both are present.
fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Installs the process-wide subscriber. Fails if one is already installed.
pub fn init_logging(default_level: &str, format: LogFormat) -> Result<()> {
    let stderr = fmt::layer().with_writer(std::io::stderr).with_target(true);
    let registry = tracing_subscriber::registry().with(filter(default_level));

    match format {
        // Source paths would point into nkeys internals, which tell someone
        // running the tool nothing. The target still separates `nk` events
        // from `nkeys` ones.
        LogFormat::Pretty => registry
            .with(stderr.with_file(false).with_line_number(false))
            .try_init(),
        LogFormat::Json => registry.with(stderr.json().flatten_event(true)).try_init(),
    }
    .context("failed to install log subscriber")
}
