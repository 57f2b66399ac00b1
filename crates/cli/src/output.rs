//! Terminal output utilities
//!
//! Status lines and summaries are written to stderr so they never mix with
//! the results on stdout.

use owo_colors::OwoColorize;
use std::time::Duration;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        eprintln!("{} {}", "ℹ".blue(), message);
    }
}

/// One-line description of a ranking pass, e.g. `3 matches out of 120 candidates in 4ms`.
///
/// Mentions the skipped remainder when evaluation stopped early.
pub fn match_summary(matched: usize, evaluated: usize, total: usize, elapsed: Duration) -> String {
    let mut line = format!(
        "{} out of {} in {}",
        format_count(matched, "match", "matches"),
        format_count(total, "candidate", "candidates"),
        format_duration(elapsed)
    );
    if evaluated < total {
        line.push_str(&format!(" ({} not evaluated)", total - evaluated));
    }
    line
}

/// Format a duration for display
pub fn format_duration(duration: Duration) -> String {
    let micros = duration.as_micros();
    if micros < 1_000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{}ms", micros / 1_000)
    } else {
        format!("{:.2}s", duration.as_secs_f64())
    }
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
