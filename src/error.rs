//! Error types for the assistant bot.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors a command handler can return.
///
/// The `Display` text of each variant is exactly what the operator sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Too few arguments for the command; carries the missing-argument message
    #[error("Error: Missing {0}.")]
    MissingArguments(&'static str),

    /// A phone number or name failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No record under the given name
    #[error("Contact not found.")]
    ContactNotFound(String),

    /// The record exists but does not hold the given phone number
    #[error("Old phone number not found.")]
    PhoneNotFound(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that end an interactive session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Reading input or writing output failed
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for handler results
pub type CommandResult = Result<String, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with SessionError
pub type SessionResult<T> = Result<T, SessionError>;
