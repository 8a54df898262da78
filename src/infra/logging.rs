use std::{
    env,
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::infra::{config::LogConfig, error::AppError};

const APP_DIR_NAME: &str = "chatdeck";
const LOG_FILE_NAME: &str = "chatdeck.log";

/// Keeps the background log writer alive. Dropping it flushes pending lines.
pub struct LoggingGuard {
    _worker: WorkerGuard,
}

/// Installs the global subscriber writing to the log file.
///
/// The terminal belongs to the TUI, so nothing is written to stdout/stderr.
/// `RUST_LOG` takes precedence over the configured level.
pub fn init(config: &LogConfig) -> Result<LoggingGuard, AppError> {
    let (dir, file_name) = split_log_path(&resolve_log_path(config));
    fs::create_dir_all(&dir).map_err(|source| AppError::LogDirCreate {
        path: dir.clone(),
        source,
    })?;

    let appender = tracing_appender::rolling::never(&dir, file_name);
    let (writer, worker) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level)),
        )
        .with_target(true)
        .with_ansi(false)
        .with_writer(writer)
        .try_init()
        .map_err(AppError::LoggingInit)?;

    Ok(LoggingGuard { _worker: worker })
}

pub fn resolve_log_path(config: &LogConfig) -> PathBuf {
    config.file.clone().unwrap_or_else(|| {
        dirs::cache_dir()
            .unwrap_or_else(env::temp_dir)
            .join(APP_DIR_NAME)
            .join(LOG_FILE_NAME)
    })
}

fn split_log_path(path: &Path) -> (PathBuf, OsString) {
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let file_name = path
        .file_name()
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| OsString::from(LOG_FILE_NAME));

    (dir, file_name)
}
