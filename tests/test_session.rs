//! End-to-end tests for the interactive session.
//!
//! Each test feeds a scripted transcript through `Session::run` using
//! in-memory input and output, exactly as the binary does with stdin/stdout.

use assistant_bot::{Session, SessionState};

const PROMPT: &str = "Enter a command: ";

/// Run a full session over `input` and return everything written to output.
async fn transcript(session: &mut Session, input: &str) -> String {
    raw_transcript(session, input.as_bytes()).await
}

/// Like `transcript`, but for input that need not be valid UTF-8.
async fn raw_transcript(session: &mut Session, input: &[u8]) -> String {
    let mut output = Vec::new();
    session
        .run(input, &mut output)
        .await
        .expect("in-memory I/O cannot fail");
    String::from_utf8(output).expect("output is UTF-8")
}

/// Responses in order, with the banner and prompts stripped.
fn responses(output: &str) -> Vec<&str> {
    output
        .lines()
        .skip(1)
        .map(|line| line.trim_start_matches(PROMPT))
        .filter(|line| !line.is_empty())
        .collect()
}

/// Test a complete scripted conversation.
///
/// This test validates:
/// - The banner is written first
/// - Every command gets exactly one response, in order
/// - The farewell ends the session
#[tokio::test]
async fn test_full_conversation() {
    let mut session = Session::new();
    let input = "hello\n\
                 add alice 1234567890\n\
                 add alice 0987654321\n\
                 change alice 1234567890 5555555555\n\
                 phone alice\n\
                 all\n\
                 exit\n";

    let output = transcript(&mut session, input).await;

    assert!(output.starts_with("Welcome to the assistant bot!\n"));
    assert_eq!(
        responses(&output),
        vec![
            "How can I help you?",
            "Contact added.",
            "Phone number added to the existing contact.",
            "Contact phone updated.",
            "Contact name: alice, phones: 5555555555, 0987654321",
            "Contact name: alice, phones: 5555555555, 0987654321",
            "Goodbye!",
        ]
    );
    assert_eq!(session.state(), SessionState::Terminated);
}

/// Test that both exit keywords terminate in any case and stop reading input.
#[tokio::test]
async fn test_exit_keywords_stop_the_loop() {
    for keyword in ["exit", "close", "EXIT", "Close", "  cLoSe  "] {
        let mut session = Session::new();
        let input = format!("{keyword}\nadd alice 1234567890\n");

        let output = transcript(&mut session, &input).await;

        assert_eq!(responses(&output), vec!["Goodbye!"], "keyword {keyword:?}");
        assert!(session.book().is_empty(), "input after {keyword:?} was processed");
    }
}

/// Test that near-miss exit commands are treated as ordinary commands.
#[tokio::test]
async fn test_other_commands_do_not_exit() {
    let mut session = Session::new();
    let input = "quit\nexit now\nbye\n";

    let output = transcript(&mut session, input).await;

    assert_eq!(
        responses(&output),
        vec!["Invalid command.", "Invalid command.", "Invalid command."]
    );
    assert!(!output.contains("Goodbye!"));
    // Only end of input ended this session.
    assert_eq!(session.state(), SessionState::Terminated);
    assert_eq!(session.metrics().invalid_commands_total(), 3);
}

/// Test that blank lines re-prompt without a response.
#[tokio::test]
async fn test_blank_lines_reprompt() {
    let mut session = Session::new();

    let output = transcript(&mut session, "\n   \nhello\nexit\n").await;

    assert_eq!(output.matches(PROMPT).count(), 4);
    assert_eq!(responses(&output), vec!["How can I help you?", "Goodbye!"]);
    assert_eq!(session.metrics().commands_total(), 1);
}

/// Test that end of input without an exit keyword terminates cleanly.
#[tokio::test]
async fn test_end_of_input_terminates_gracefully() {
    let mut session = Session::new();

    let output = transcript(&mut session, "add bob 1111111111\n").await;

    assert_eq!(responses(&output), vec!["Contact added."]);
    assert_eq!(session.state(), SessionState::Terminated);
    assert!(session.book().contains("bob"));
}

/// Test that errors are rendered as responses and the session keeps going.
#[tokio::test]
async fn test_errors_do_not_end_session() {
    let mut session = Session::new();
    let input = "add bob 123\nchange bob 1 2\nphone\nadd bob 1111111111\nexit\n";

    let output = transcript(&mut session, input).await;

    assert_eq!(
        responses(&output),
        vec![
            "Phone number must be 10 digits",
            "Contact not found.",
            "Error: Missing name.",
            "Contact added.",
            "Goodbye!",
        ]
    );
    assert_eq!(session.metrics().command_errors_total(), 3);
}

/// Test that a line with invalid UTF-8 does not end the session.
///
/// This test validates:
/// - The bad bytes are replaced and the line is handled like any other
/// - Commands after it still run and the exit keyword is honoured
/// - Contacts added before it survive
#[tokio::test]
async fn test_invalid_utf8_line_is_recovered() {
    let mut session = Session::new();
    let input = b"add alice 1234567890\nadd J\xf6rg 1111111111\nphone alice\nexit\n";

    let output = raw_transcript(&mut session, input).await;

    assert_eq!(
        responses(&output),
        vec![
            "Contact added.",
            "Contact added.",
            "Contact name: alice, phones: 1234567890",
            "Goodbye!",
        ]
    );
    assert_eq!(session.state(), SessionState::Terminated);
    assert!(session.book().contains("J\u{FFFD}rg"));
}

/// Test that Windows line endings are stripped before parsing.
#[tokio::test]
async fn test_crlf_line_endings() {
    let mut session = Session::new();

    let output = transcript(&mut session, "add alice 1234567890\r\nexit\r\n").await;

    assert_eq!(responses(&output), vec!["Contact added.", "Goodbye!"]);
    assert!(session.book().find("alice").unwrap().find_phone("1234567890").is_some());
}
