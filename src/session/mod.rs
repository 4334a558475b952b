//! Interactive read-parse-dispatch-print loop.
//!
//! A `Session` owns the address book for its whole lifetime. `process_line`
//! handles one input line without touching I/O; `run` drives it against any
//! async line source and sink (stdin/stdout in the binary, byte buffers in
//! tests).

use crate::commands::{dispatch, parse_input, render_outcome, Command};
use crate::error::SessionResult;
use crate::metrics::{CommandTimer, SessionMetrics};
use crate::models::AddressBook;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

pub const WELCOME_MESSAGE: &str = "Welcome to the assistant bot!";
pub const FAREWELL_MESSAGE: &str = "Goodbye!";
pub const PROMPT: &str = "Enter a command: ";

const EXIT_KEYWORDS: [&str; 2] = ["exit", "close"];

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// Whether `line` asks to end the session.
///
/// Only the bare keyword counts (case-insensitive, surrounding whitespace
/// ignored); `exit now` is an ordinary, unknown command.
pub fn is_exit_command(line: &str) -> bool {
    let line = line.trim();
    EXIT_KEYWORDS
        .iter()
        .any(|keyword| line.eq_ignore_ascii_case(keyword))
}

/// Decode one raw input line, dropping the `\n` or `\r\n` terminator.
fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

/// One operator session over a fresh, empty address book.
#[derive(Debug)]
pub struct Session {
    book: AddressBook,
    state: SessionState,
    metrics: SessionMetrics,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a running session with an empty address book.
    pub fn new() -> Self {
        Self {
            book: AddressBook::new(),
            state: SessionState::Running,
            metrics: SessionMetrics::new(),
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn metrics(&self) -> &SessionMetrics {
        &self.metrics
    }

    /// Handle one input line and return the response to print.
    ///
    /// Returns `None` for blank input and for any line received after the
    /// session terminated.
    pub fn process_line(&mut self, line: &str) -> Option<String> {
        if self.state == SessionState::Terminated {
            return None;
        }

        if is_exit_command(line) {
            self.state = SessionState::Terminated;
            return Some(FAREWELL_MESSAGE.to_string());
        }

        let parsed = parse_input(line)?;
        let command = Command::from_keyword(&parsed.command);
        debug!(command = %parsed.command, args = ?parsed.args, "Dispatching command");

        let timer = CommandTimer::start();
        let result = dispatch(command, &parsed.args, &mut self.book);
        timer.complete(&mut self.metrics);

        if command == Command::Unknown {
            self.metrics.record_invalid_command();
        }
        if let Err(err) = &result {
            self.metrics.record_command_error();
            debug!(command = %parsed.command, error = ?err, "Command rejected");
        }

        Some(render_outcome(result))
    }

    /// Run the loop until an exit keyword or end of input.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Io` if reading or writing fails. End of input
    /// is a normal termination, not an error. Bytes that are not valid UTF-8
    /// are replaced with U+FFFD and the line is processed as usual.
    pub async fn run<R, W>(&mut self, mut reader: R, writer: &mut W) -> SessionResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!("Session started");
        writer.write_all(WELCOME_MESSAGE.as_bytes()).await?;
        writer.write_all(b"\n").await?;

        let mut buf = Vec::new();
        while self.state == SessionState::Running {
            writer.write_all(PROMPT.as_bytes()).await?;
            writer.flush().await?;

            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                info!("End of input");
                // Leave the terminal on a fresh line after the dangling prompt.
                writer.write_all(b"\n").await?;
                self.state = SessionState::Terminated;
                break;
            }

            let line = decode_line(&buf);
            if let Some(response) = self.process_line(&line) {
                writer.write_all(response.as_bytes()).await?;
                writer.write_all(b"\n").await?;
            }
        }

        writer.flush().await?;
        info!(
            contacts = self.book.len(),
            summary = %self.metrics.summary(),
            "Session terminated"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new()
    }

    #[test]
    fn test_is_exit_command() {
        assert!(is_exit_command("exit"));
        assert!(is_exit_command("CLOSE"));
        assert!(is_exit_command("  Exit \n"));
        assert!(!is_exit_command("exit now"));
        assert!(!is_exit_command("quit"));
        assert!(!is_exit_command(""));
    }

    #[test]
    fn test_decode_line() {
        assert_eq!(decode_line(b"hello\n"), "hello");
        assert_eq!(decode_line(b"hello\r\n"), "hello");
        assert_eq!(decode_line(b"hello"), "hello");
        assert_eq!(decode_line(b"add J\xf6rg 1111111111\n"), "add J\u{FFFD}rg 1111111111");
    }

    #[test]
    fn test_process_line_routes_commands() {
        let mut session = session();

        assert_eq!(
            session.process_line("add alice 1234567890").as_deref(),
            Some("Contact added.")
        );
        assert_eq!(
            session.process_line("phone alice").as_deref(),
            Some("Contact name: alice, phones: 1234567890")
        );
        assert_eq!(session.state(), SessionState::Running);
    }

    #[test]
    fn test_process_line_blank_input_is_silent() {
        let mut session = session();
        assert_eq!(session.process_line("   "), None);
        assert_eq!(session.metrics().commands_total(), 0);
        assert_eq!(session.state(), SessionState::Running);
    }

    #[test]
    fn test_process_line_exit_terminates() {
        let mut session = session();
        assert_eq!(
            session.process_line("Close").as_deref(),
            Some(FAREWELL_MESSAGE)
        );
        assert_eq!(session.state(), SessionState::Terminated);
        assert_eq!(session.process_line("hello"), None);
    }

    #[test]
    fn test_process_line_records_metrics() {
        let mut session = session();
        session.process_line("hello");
        session.process_line("foo");
        session.process_line("phone nobody");

        let metrics = session.metrics();
        assert_eq!(metrics.commands_total(), 3);
        assert_eq!(metrics.invalid_commands_total(), 1);
        assert_eq!(metrics.command_errors_total(), 1);
    }

    #[tokio::test]
    async fn test_run_writes_banner_prompt_and_farewell() {
        let mut session = session();
        let mut output = Vec::new();

        session
            .run(&b"hello\nexit\n"[..], &mut output)
            .await
            .unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_eq!(
            output,
            "Welcome to the assistant bot!\n\
             Enter a command: How can I help you?\n\
             Enter a command: Goodbye!\n"
        );
        assert_eq!(session.state(), SessionState::Terminated);
    }

    #[tokio::test]
    async fn test_run_stops_at_end_of_input() {
        let mut session = session();
        let mut output = Vec::new();

        session
            .run(&b"add alice 1234567890"[..], &mut output)
            .await
            .unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.ends_with("Enter a command: Contact added.\nEnter a command: \n"));
        assert_eq!(session.state(), SessionState::Terminated);
        assert!(session.book().contains("alice"));
    }
}
