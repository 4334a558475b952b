//! Command parsing and dispatch.
//!
//! `dispatch` routes a parsed keyword to its handler and returns the raw
//! `CommandResult`; `handle_command` renders either outcome to the text shown
//! to the operator.

pub mod handlers;
pub mod parser;

pub use handlers::{add_contact, change_contact, greet, show_all, show_phone};
pub use parser::{parse_input, ParsedInput};

use crate::error::CommandResult;
use crate::models::AddressBook;

pub const INVALID_COMMAND_MESSAGE: &str = "Invalid command.";

/// The verbs the bot understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Change,
    Phone,
    All,
    Hello,
    Unknown,
}

impl Command {
    /// Map a lower-cased keyword to its command.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "all" => Self::All,
            "hello" => Self::Hello,
            _ => Self::Unknown,
        }
    }
}

/// Run the handler for `command` against `book`.
///
/// Unknown keywords are not errors: they yield `Ok("Invalid command.")`.
pub fn dispatch(command: Command, args: &[String], book: &mut AddressBook) -> CommandResult {
    match command {
        Command::Add => add_contact(args, book),
        Command::Change => change_contact(args, book),
        Command::Phone => show_phone(args, book),
        Command::All => show_all(book),
        Command::Hello => greet(),
        Command::Unknown => Ok(INVALID_COMMAND_MESSAGE.to_string()),
    }
}

/// Render a handler outcome as operator-facing text.
pub fn render_outcome(result: CommandResult) -> String {
    result.unwrap_or_else(|err| err.to_string())
}

/// Dispatch `keyword` and render the outcome in one step.
pub fn handle_command(keyword: &str, args: &[String], book: &mut AddressBook) -> String {
    render_outcome(dispatch(Command::from_keyword(keyword), args, book))
}
