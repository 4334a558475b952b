//! Assistant Bot - an interactive command-line contact manager.
//!
//! The bot reads one command per line, keeps an in-memory address book of
//! contact names and their phone numbers, and answers every command with a
//! single confirmation or error message. Nothing is persisted between runs.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`ContactName`, `PhoneNumber`)
//! - **models**: `Record` and the `AddressBook`
//! - **commands**: Input parsing, per-verb handlers and dispatch
//! - **session**: The interactive read-dispatch-print loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration from environment variables
//! - **metrics**: Per-session command counters

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod session;

pub use commands::{dispatch, handle_command, parse_input, Command, ParsedInput};
pub use config::Config;
pub use domain::{validate_phone, ContactName, PhoneNumber, ValidationError};
pub use error::{CommandError, CommandResult, ConfigError, SessionError};
pub use metrics::{MetricsSummary, SessionMetrics};
pub use models::{AddressBook, Record};
pub use session::{Session, SessionState};
