//! Tracing setup: console output plus one log file per launch.
//!
//! Files are named `fwicast_<local timestamp>.log` inside `.fwicast/logs`, so
//! their names sort oldest first. Only the newest [`KEEP_LOG_FILES`] survive a
//! launch. `RUST_LOG` overrides the default `info` filter.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::app_dirs::{AppDirError, AppPaths};

/// Log files kept after pruning, including the current one.
pub const KEEP_LOG_FILES: usize = 10;
const LOG_FILE_PREFIX: &str = "fwicast_";
const LOG_FILE_SUFFIX: &str = ".log";
const DEFAULT_FILTER: &str = "info";

const FILE_STAMP: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]_[hour]-[minute]-[second]");
const LINE_STAMP: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

// Dropping the guard would stop the file writer.
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Why logging could not be set up. Startup continues without it.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error(transparent)]
    Dirs(#[from] AppDirError),
    #[error("Log file I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to format log file timestamp: {0}")]
    Timestamp(#[from] time::error::Format),
    #[error("A global tracing subscriber is already installed: {0}")]
    AlreadyInstalled(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Install the global subscriber. Later calls do nothing.
pub fn init() -> Result<(), LoggingError> {
    if FILE_GUARD.get().is_some() {
        return Ok(());
    }
    let logs_dir = AppPaths::from_env()?.ensure_logs_dir()?;
    install(&logs_dir)
}

fn install(logs_dir: &Path) -> Result<(), LoggingError> {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    let file_path = logs_dir.join(log_file_name(OffsetDateTime::now_utc().to_offset(offset))?);
    let file = open_log_file(&file_path)?;
    prune_logs(logs_dir, KEEP_LOG_FILES)?;

    let (file_writer, guard) = tracing_appender::non_blocking(file);
    let timer = fmt::time::OffsetTime::new(offset, LINE_STAMP);
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)))
        .with(fmt::layer().with_timer(timer.clone()))
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_timer(timer)
                .with_writer(file_writer),
        );
    tracing::subscriber::set_global_default(subscriber)?;
    let _ = FILE_GUARD.set(guard);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_file = %file_path.display(),
        "fwicast starting"
    );
    Ok(())
}

fn log_file_name(started: OffsetDateTime) -> Result<String, LoggingError> {
    Ok(format!(
        "{LOG_FILE_PREFIX}{}{LOG_FILE_SUFFIX}",
        started.format(FILE_STAMP)?
    ))
}

fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// Delete the oldest fwicast log files so that at most `keep` remain.
fn prune_logs(dir: &Path, keep: usize) -> Result<(), LoggingError> {
    let entries = fs::read_dir(dir).map_err(|source| LoggingError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut logs: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| is_log_file(path))
        .collect();
    logs.sort();
    let excess = logs.len().saturating_sub(keep);
    for path in logs.drain(..excess) {
        fs::remove_file(&path).map_err(|source| LoggingError::Io {
            path: path.clone(),
            source,
        })?;
    }
    Ok(())
}

fn is_log_file(path: &Path) -> bool {
    path.is_file()
        && path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(LOG_FILE_PREFIX) && name.ends_with(LOG_FILE_SUFFIX))
}
