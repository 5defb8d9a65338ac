use std::fs::OpenOptions;
use std::path::PathBuf;

use log::LevelFilter;

/// Where log records go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// No logger installed; `log` macros are no-ops
    Off,
    Stderr,
    /// Append to a file (the TUI owns the terminal, so it can only log here)
    File(PathBuf),
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("unknown log level {0:?}")]
    InvalidLevel(String),
    #[error("could not open log file {path}: {source}")]
    OpenError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("logger already initialized")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}

/// Parse a level name, defaulting to `warn`
pub fn parse_level(level: Option<&str>) -> Result<LevelFilter, LoggingError> {
    match level {
        None => Ok(LevelFilter::Warn),
        Some(name) => name
            .parse::<LevelFilter>()
            .map_err(|_| LoggingError::InvalidLevel(name.to_string())),
    }
}

/// Install the process logger. `RUST_LOG` still refines the filter.
pub fn init_logging(level: LevelFilter, target: LogTarget) -> Result<(), LoggingError> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    match target {
        LogTarget::Off => return Ok(()),
        LogTarget::Stderr => {
            builder.target(env_logger::Target::Stderr);
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|e| LoggingError::OpenError { path, source: e })?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
            builder.write_style(env_logger::WriteStyle::Never);
        }
    }

    builder.try_init()?;
    Ok(())
}
