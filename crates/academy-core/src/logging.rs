//! File logging for the academy binary.
//!
//! The TUI owns stdout, so every event goes to a daily file under
//! [`log_directory`]. `ACADEMY_LOG` takes an `EnvFilter` directive:
//!
//! ```bash
//! ACADEMY_LOG=debug academy module-1
//! ACADEMY_LOG=academy_app=trace academy
//! ```

use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

/// Environment variable that overrides the log filter
pub const LOG_ENV_VAR: &str = "ACADEMY_LOG";

const DEFAULT_FILTER: &str = "crypto_academy=info,academy_app=info,academy_tui=info,warn";
const APP_DIR: &str = "crypto-academy";
const FILE_PREFIX: &str = "academy";
const FILE_SUFFIX: &str = "log";

/// `<data_local_dir>/crypto-academy/logs`, or `./crypto-academy/logs`
pub fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("logs")
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber; files are named `academy.<date>.log`.
/// Returns the directory the files are written to.
pub fn init() -> Result<PathBuf> {
    let dir = log_directory();
    std::fs::create_dir_all(&dir)?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(FILE_PREFIX)
        .filename_suffix(FILE_SUFFIX)
        .build(&dir)
        .map_err(|e| Error::config(format!("Cannot open log file in {}: {e}", dir.display())))?;

    let file_layer = fmt::layer()
        .with_writer(appender)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_timer(fmt::time::ChronoLocal::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ));

    tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .try_init()
        .map_err(|e| Error::config(format!("Logging already initialised: {e}")))?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        dir = %dir.display(),
        "Crypto Academy starting"
    );

    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_is_app_scoped() {
        assert!(log_directory().ends_with("crypto-academy/logs"));
    }

    #[test]
    fn test_default_filter_is_valid() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }
}
