//! Logging setup.
//!
//! Logs go to stderr so that stdout carries only the command's report.

use crate::error::CliError;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "convtrain_core=info,convtrain_client=info,convtrain_cli=info,warn";

pub fn init_tracing() -> Result<(), CliError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| CliError::Telemetry(e.to_string()))
}
