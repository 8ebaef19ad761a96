use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for the validation, storage and configuration layers.
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = StdResult<T, TrackerError>;

/// Outcome of a single menu operation that did not complete.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Core(#[from] TrackerError),
    #[error("Input error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Exit requested")]
    ExitRequested,
}

/// User-facing error for failures that end the session.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] TrackerError),
    #[error("Input error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Terminal error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

impl From<rusqlite::Error> for TrackerError {
    fn from(err: rusqlite::Error) -> Self {
        TrackerError::StorageError(err.to_string())
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        TrackerError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::ConfigError(err.to_string())
    }
}
