//! Basic metrics for an interactive session.
//!
//! Counts dispatched commands and how they ended. A summary is logged when
//! the session terminates.

use std::fmt;
use std::time::{Duration, Instant};

/// Per-session command counters.
///
/// The session owns its metrics exclusively, so plain integers suffice.
#[derive(Debug, Clone, Default)]
pub struct SessionMetrics {
    /// Total number of commands dispatched (blank lines and exit excluded)
    commands_total: u64,

    /// Commands whose handler returned an error
    command_errors_total: u64,

    /// Commands with an unrecognised keyword
    invalid_commands_total: u64,

    /// Time spent inside handlers
    handler_duration_total: Duration,
}

impl SessionMetrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one dispatched command.
    pub fn record_command(&mut self, duration: Duration) {
        self.commands_total += 1;
        self.handler_duration_total += duration;
    }

    /// Record a handler error.
    pub fn record_command_error(&mut self) {
        self.command_errors_total += 1;
    }

    /// Record an unrecognised command keyword.
    pub fn record_invalid_command(&mut self) {
        self.invalid_commands_total += 1;
    }

    pub fn commands_total(&self) -> u64 {
        self.commands_total
    }

    pub fn command_errors_total(&self) -> u64 {
        self.command_errors_total
    }

    pub fn invalid_commands_total(&self) -> u64 {
        self.invalid_commands_total
    }

    /// Get average handler duration in microseconds.
    pub fn handler_duration_avg_us(&self) -> f64 {
        if self.commands_total == 0 {
            0.0
        } else {
            self.handler_duration_total.as_micros() as f64 / self.commands_total as f64
        }
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            commands_total: self.commands_total,
            command_errors_total: self.command_errors_total,
            invalid_commands_total: self.invalid_commands_total,
            handler_duration_avg_us: self.handler_duration_avg_us(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSummary {
    pub commands_total: u64,
    pub command_errors_total: u64,
    pub invalid_commands_total: u64,
    pub handler_duration_avg_us: f64,
}

impl fmt::Display for MetricsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "commands: {}, errors: {}, invalid: {}, avg handler: {:.1}us",
            self.commands_total,
            self.command_errors_total,
            self.invalid_commands_total,
            self.handler_duration_avg_us
        )
    }
}

/// Helper for timing a single handler call.
pub struct CommandTimer {
    start: Instant,
}

impl CommandTimer {
    /// Start timing a command.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Complete the timing and record the command.
    pub fn complete(self, metrics: &mut SessionMetrics) {
        metrics.record_command(self.start.elapsed());
    }
}
