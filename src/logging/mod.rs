//! Process-wide logging initialization.
//!
//! [`init`] installs a size-rotated file sink and, optionally, a stdout sink.
//! Both share [`LineFormat`] and a single minimum level, so a record is
//! either written to every active sink or dropped by all of them. It must run
//! before anything else logs and may succeed only once per process.

mod format;
mod rotate;

pub use format::LineFormat;
pub use rotate::RotatingFile;

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::MonitoringConfig;
use crate::error::LoggingError;

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Handle to the installed file sink.
#[derive(Debug, Clone)]
pub struct LoggingHandle {
    file: Arc<RotatingFile>,
}

impl LoggingHandle {
    #[must_use]
    pub fn log_file(&self) -> &Path {
        self.file.path()
    }

    pub fn flush(&self) -> std::io::Result<()> {
        self.file.flush()
    }
}

/// Install the global subscriber described by `config`.
///
/// # Errors
///
/// - [`LoggingError::AlreadyInitialized`] on any call after a successful one
/// - [`LoggingError::Filesystem`] if the log directory or file cannot be created
/// - [`LoggingError::Subscriber`] if another global subscriber is already set
pub fn init(config: &MonitoringConfig) -> Result<LoggingHandle, LoggingError> {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return Err(LoggingError::AlreadyInitialized);
    }

    let result = install(config);
    if result.is_err() {
        INITIALIZED.store(false, Ordering::SeqCst);
    }
    result
}

fn install(config: &MonitoringConfig) -> Result<LoggingHandle, LoggingError> {
    let file = Arc::new(open_sink(config)?);

    let file_layer = fmt::layer()
        .event_format(LineFormat)
        .with_ansi(false)
        .with_writer(file.clone());

    let stdout_layer = config.log_to_stdout.then(|| {
        fmt::layer()
            .event_format(LineFormat)
            .with_ansi(false)
            .with_writer(std::io::stdout)
    });

    tracing_subscriber::registry()
        .with(config.log_level.as_filter())
        .with(file_layer)
        .with(stdout_layer)
        .try_init()
        .map_err(|e| LoggingError::Subscriber(e.to_string()))?;

    Ok(LoggingHandle { file })
}

/// Create the log directory if needed and open the rotating file.
pub fn open_sink(config: &MonitoringConfig) -> Result<RotatingFile, LoggingError> {
    let path = &config.log_file;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| LoggingError::Filesystem {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    RotatingFile::open(path, config.log_max_bytes(), config.log_backup_count).map_err(|source| {
        LoggingError::Filesystem {
            path: path.clone(),
            source,
        }
    })
}
