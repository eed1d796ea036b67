//! tracing-subscriber setup
//!
//! Subcommands log to stderr. While the TUI owns the terminal, logs are
//! appended to `<data-dir>/dynform.log` instead so they cannot corrupt the
//! screen.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::types::LogLevel;

pub const LOG_FILE_NAME: &str = "dynform.log";

pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    pub fn file_in(data_dir: &Path) -> Self {
        LogTarget::File(data_dir.join(LOG_FILE_NAME))
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `level`.
pub fn init(level: LogLevel, target: LogTarget) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let installed = match target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    // A subscriber may already be installed when running under a test harness
    if let Err(err) = installed {
        tracing::debug!("tracing subscriber not installed: {}", err);
    }

    Ok(())
}
