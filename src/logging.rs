use log::LevelFilter;
use std::env;
use std::path::PathBuf;
use thiserror::Error;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};

const DEFAULT_LOG_FILE_NAME: &str = "churn-dashboard.log";

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

impl From<LogLevel> for tracing_subscriber::filter::LevelFilter {
    fn from(level: LogLevel) -> Self {
        use tracing_subscriber::filter::LevelFilter as Filter;
        match level {
            LogLevel::Trace => Filter::TRACE,
            LogLevel::Debug => Filter::DEBUG,
            LogLevel::Info => Filter::INFO,
            LogLevel::Warn => Filter::WARN,
            LogLevel::Error => Filter::ERROR,
        }
    }
}

/// Where log records go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    /// Plain commands write to stderr.
    Stderr,
    /// The TUI owns the terminal, so records go to a file.
    File(PathBuf),
    /// Nothing is installed; records are dropped.
    Disabled,
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to prepare log directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to open log file: {0}")]
    Appender(#[from] InitError),

    #[error("Failed to install log subscriber: {0}")]
    Install(String),
}

pub fn get_rust_log_level() -> LogLevel {
    let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    parse_rust_log_level(&rust_log)
}

pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    // Handle common RUST_LOG formats
    let level_str = rust_log
        .split(',')
        .next()
        .unwrap_or(rust_log)
        .split('=')
        .next_back()
        .unwrap_or(rust_log)
        .to_lowercase();

    match level_str.as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        _ => LogLevel::Info, // Default to info if parsing fails
    }
}

/// Installs the global subscriber for `sink`, bridging `log` records into it.
pub fn init(sink: LogSink) -> Result<(), LoggingError> {
    let level = tracing_subscriber::filter::LevelFilter::from(get_rust_log_level());
    let builder = tracing_subscriber::fmt().with_max_level(level).with_target(false);

    match sink {
        LogSink::Disabled => Ok(()),
        LogSink::Stderr => builder
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| LoggingError::Install(e.to_string())),
        LogSink::File(path) => {
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            };
            std::fs::create_dir_all(&dir)?;
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string());
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(file_name)
                .build(dir)?;
            builder
                .with_writer(appender)
                .with_ansi(false)
                .try_init()
                .map_err(|e| LoggingError::Install(e.to_string()))
        }
    }
}
