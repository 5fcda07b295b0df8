//! # Logging Setup
//!
//! Installs the global `tracing` subscriber: an env-driven filter, a console layer
//! and a plain-text session log under the data directory.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const SESSION_LOG: &str = "session.log";

const DEFAULT_FILTER: &str =
    "info,matrix_sdk=warn,matrix_sdk_base=warn,matrix_sdk_crypto=error,ruma=warn,hyper=warn";

/// Keep the returned guard alive for the whole process or buffered file lines are lost.
pub fn init(log_dir: &str) -> Result<WorkerGuard> {
    let dir = Path::new(log_dir);
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {log_dir}"))?;
    }

    // Clear previous session log
    let log_path = dir.join(SESSION_LOG);
    if log_path.exists() {
        let _ = fs::remove_file(&log_path);
    }

    let file_appender = tracing_appender::rolling::never(dir, SESSION_LOG);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false);

    let console_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stdout);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}
