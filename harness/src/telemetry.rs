//! Structured logging setup.
//!
//! Logs go to stderr so that stdout stays clean for the run report. The
//! `RUST_LOG` environment variable, when set, takes precedence over the
//! configured level.

use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Telemetry initialization failed: {reason}")]
    InitializationFailed { reason: String },
}

pub type TelemetryResult<T> = Result<T, TelemetryError>;

/// Builds the filter used by [`init_logging`].
pub fn env_filter(level: &str) -> TelemetryResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(level).map_err(|e| TelemetryError::InitializationFailed {
        reason: format!("invalid log level '{}': {}", level, e),
    })
}

/// Installs the global `fmt` subscriber. Returns `Ok(false)` when a
/// subscriber was already installed.
pub fn init_logging(level: &str) -> TelemetryResult<bool> {
    let filter = env_filter(level)?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        debug!(level, "Logging initialized");
    }

    Ok(installed)
}
