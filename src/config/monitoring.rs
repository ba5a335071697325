//! Monitoring, alerting and log sink settings.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::level_filters::LevelFilter;
use url::Url;

use super::env::EnvReader;

const DEFAULT_LOG_FILE: &str = "/app/logs/trading_bot.log";

/// Minimum severity recorded by every log sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// Equivalent tracing filter. `Critical` has no tracing counterpart and
    /// filters as `ERROR`.
    #[must_use]
    pub fn as_filter(self) -> LevelFilter {
        match self {
            Self::Debug => LevelFilter::DEBUG,
            Self::Info => LevelFilter::INFO,
            Self::Warning => LevelFilter::WARN,
            Self::Error | Self::Critical => LevelFilter::ERROR,
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARNING" | "WARN" => Ok(Self::Warning),
            "ERROR" => Ok(Self::Error),
            "CRITICAL" => Ok(Self::Critical),
            _ => Err("must be one of DEBUG, INFO, WARNING, ERROR, CRITICAL".to_string()),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        };
        f.write_str(name)
    }
}

/// Monitoring and alerting configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitoringConfig {
    pub discord_webhook_url: Option<Url>,
    pub prometheus_port: u16,
    pub log_level: LogLevel,
    pub log_file: PathBuf,
    pub log_to_stdout: bool,
    /// Rotate once the active file would exceed this many megabytes; 0 never rotates.
    pub log_max_size_mb: u64,
    /// Rotated files kept beside the active one.
    pub log_backup_count: u32,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            discord_webhook_url: None,
            prometheus_port: 8000,
            log_level: LogLevel::Info,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_to_stdout: true,
            log_max_size_mb: 100,
            log_backup_count: 5,
        }
    }
}

impl MonitoringConfig {
    pub(crate) fn from_env(reader: &mut EnvReader<'_>) -> Self {
        let d = Self::default();
        Self {
            discord_webhook_url: reader.parse_optional("DISCORD_WEBHOOK_URL"),
            prometheus_port: reader.parse("PROMETHEUS_PORT", d.prometheus_port),
            log_level: reader.parse("LOG_LEVEL", d.log_level),
            log_file: PathBuf::from(reader.string("LOG_FILE", DEFAULT_LOG_FILE)),
            log_to_stdout: reader.flag("LOG_TO_STDOUT", d.log_to_stdout),
            log_max_size_mb: reader.parse("LOG_MAX_SIZE_MB", d.log_max_size_mb),
            log_backup_count: reader.parse("LOG_BACKUP_COUNT", d.log_backup_count),
        }
    }

    /// Rotation threshold in bytes.
    #[must_use]
    pub fn log_max_bytes(&self) -> u64 {
        self.log_max_size_mb.saturating_mul(1024 * 1024)
    }
}
