//! # Logging Initialization
//!
//! Centralised `tracing` setup shared by the workspace binaries.
//!
//! - **Environment filter**: verbosity comes from `RUST_LOG` when it is set,
//!   otherwise from the level passed by the caller.
//! - **Stderr (default)**: logs go to `stderr` with ANSI colours. Stdout is
//!   never written to, so binaries keep it for their own output.
//! - **File (opt-in)**: a daily rolling file in the per-user cache directory
//!   (resolved with the `directories` crate). If that directory cannot be
//!   resolved or created, logging falls back to `stderr`.
//!
//! Initialization happens once per process. Later calls return the target
//! chosen by the first call. A subscriber installed by someone else is never
//! replaced.

use directories::ProjectDirs;
use std::{
    io::stderr,
    path::{Path, PathBuf},
    sync::OnceLock,
};
use tracing::{debug, dispatcher};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt::layer, prelude::*};

static TARGET: OnceLock<LogTarget> = OnceLock::new();

/// Where log output ended up after initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Directory holding the rolling log files.
    File(PathBuf),
    /// Another global subscriber was already installed and is kept as is.
    External,
}

/// Per-user cache directory used for log files of `app_name`.
pub fn log_dir(app_name: &str) -> Option<PathBuf> {
    ProjectDirs::from("org", "example", app_name).map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Creates `dir` if needed and opens a daily rolling appender inside it.
///
/// Returns `None` when the directory or the first log file cannot be created.
pub fn open_file_appender(dir: &Path, app_name: &str) -> Option<RollingFileAppender> {
    std::fs::create_dir_all(dir).ok()?;
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(app_name)
        .filename_suffix("log")
        .build(dir)
        .ok()
}

fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
}

fn init_stderr(log_level: &str) -> LogTarget {
    match tracing_subscriber::registry()
        .with(env_filter(log_level))
        .with(layer().with_writer(stderr).with_ansi(true))
        .try_init()
    {
        Ok(()) => LogTarget::Stderr,
        Err(_) => LogTarget::External,
    }
}

fn init_file(dir: &Path, app_name: &str, log_level: &str) -> LogTarget {
    let Some(appender) = open_file_appender(dir, app_name) else {
        return init_stderr(log_level);
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(appender);
    match tracing_subscriber::registry()
        .with(env_filter(log_level))
        .with(layer().with_writer(non_blocking).with_ansi(false))
        .try_init()
    {
        Ok(()) => {
            // Leaked so buffered lines are flushed for the whole process lifetime.
            Box::leak(Box::new(guard));
            LogTarget::File(dir.to_path_buf())
        }
        // Dropping the guard stops the writer thread.
        Err(_) => LogTarget::External,
    }
}

fn install(app_name: &str, log_level: &str, file_dir: Option<PathBuf>) -> &'static LogTarget {
    let target = TARGET.get_or_init(|| {
        if dispatcher::has_been_set() {
            return LogTarget::External;
        }
        match file_dir {
            Some(dir) => init_file(&dir, app_name, log_level),
            None => init_stderr(log_level),
        }
    });
    debug!(?target, app_name, "logging initialized");
    target
}

/// Installs the global tracing subscriber.
///
/// `log_level` is any `EnvFilter` directive (`"info"`, `"warn,webservice=debug"`)
/// and is ignored when `RUST_LOG` is set. File logging uses [`log_dir`] and
/// falls back to stderr when it is unavailable. If some other subscriber is
/// already global, nothing is installed and [`LogTarget::External`] is returned.
pub fn init_logging(app_name: &str, log_level: &str, log_to_file: bool) -> &'static LogTarget {
    let file_dir = if log_to_file { log_dir(app_name) } else { None };
    install(app_name, log_level, file_dir)
}

/// Like [`init_logging`] with file output, but writes the rolling files to `dir`.
pub fn init_logging_in_dir(app_name: &str, log_level: &str, dir: &Path) -> &'static LogTarget {
    install(app_name, log_level, Some(dir.to_path_buf()))
}
