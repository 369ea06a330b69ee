//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Every `Display` message is a single line suitable for showing to the user as-is.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by record and address book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A raw value failed its field rule
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A referenced name or phone is absent
    #[error("{0}")]
    NotFound(String),
}

impl BookError {
    pub(crate) fn phone_not_found(phone: &str) -> Self {
        BookError::NotFound(format!("Phone number {} not found.", phone))
    }

    pub(crate) fn record_not_found(name: &str) -> Self {
        BookError::NotFound(format!("Record for {} not found.", name))
    }
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the snapshot file failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot could not be encoded or decoded
    #[error("Snapshot format error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Errors produced while turning a line of input into a reply.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Unknown command keyword
    #[error("Invalid command.")]
    InvalidCommand,

    /// Wrong number of arguments for a known command
    #[error("Invalid input. Please provide the correct number of arguments.")]
    InvalidInput,

    /// The core operation refused the request
    #[error(transparent)]
    Book(#[from] BookError),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::Book(BookError::Validation(err))
    }
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
