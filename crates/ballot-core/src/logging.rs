//! Tracing setup.
//!
//! Logs go to a file under `$BALLOT_HOME/logs` so the full-screen UI is never
//! drawn over. `BALLOT_LOG` takes precedence over the configured level.

use std::fs;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "BALLOT_LOG";

/// Builds the level filter: `BALLOT_LOG` if set and valid, else the config level.
pub fn build_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber writing to the configured log file.
///
/// Keep the returned guard alive for the life of the process; dropping it
/// flushes pending lines.
///
/// # Errors
/// Returns an error if the log directory cannot be created or a global
/// subscriber is already installed.
pub fn init(config: &Config) -> Result<WorkerGuard> {
    let path = config.log_path();
    let dir = path
        .parent()
        .context("log path has no parent directory")?
        .to_path_buf();
    fs::create_dir_all(&dir).with_context(|| format!("create log dir {}", dir.display()))?;

    let file_name = path
        .file_name()
        .context("log path has no file name")?
        .to_os_string();
    let appender = tracing_appender::rolling::never(&dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(config))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install tracing subscriber: {e}"))?;

    Ok(guard)
}
