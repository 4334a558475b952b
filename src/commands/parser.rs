//! Splits a raw input line into a command keyword and its arguments.

/// A tokenized input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    /// First token, lower-cased.
    pub command: String,

    /// Remaining tokens in order, case preserved.
    pub args: Vec<String>,
}

/// Tokenize `line` on whitespace.
///
/// Returns `None` for empty or whitespace-only input, which the session
/// treats as "prompt again".
pub fn parse_input(line: &str) -> Option<ParsedInput> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    let args = tokens.map(str::to_string).collect();

    Some(ParsedInput { command, args })
}
