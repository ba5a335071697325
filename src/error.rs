use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// A configuration finding that blocks startup.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} not set")]
    MissingField { field: &'static str },

    #[error("{field} {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("invalid value for {field}: {value:?} ({reason})")]
    Parse {
        field: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    /// Environment variable the finding refers to.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field }
            | Self::InvalidValue { field, .. }
            | Self::Parse { field, .. } => field,
        }
    }
}

/// A configuration finding that is reported but does not block startup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    #[error("{field} not set ({note})")]
    MissingOptional {
        field: &'static str,
        note: &'static str,
    },
}

impl ConfigWarning {
    /// Environment variable the finding refers to.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingOptional { field, .. } => field,
        }
    }
}

/// Logging initialization errors.
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("failed to prepare log file {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("logging has already been initialized")]
    AlreadyInitialized,

    #[error("failed to install log subscriber: {0}")]
    Subscriber(String),
}

#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    #[error("configuration has {errors} error(s)")]
    #[diagnostic(
        code(kalshibot::config),
        help("set the reported environment variables (or .env entries) and restart")
    )]
    InvalidConfiguration { errors: usize },

    #[error(transparent)]
    #[diagnostic(code(kalshibot::logging))]
    Logging(#[from] LoggingError),

    #[error("IO error: {0}")]
    #[diagnostic(code(kalshibot::io))]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
