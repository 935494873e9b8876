//! Shared CLI output helpers for consistent operator-facing text.
//!
//! Status lines and tables go to stdout, errors to stderr. Colors are only
//! emitted when the target stream supports them.

use std::fmt::Display;

use owo_colors::{OwoColorize, Stream};

const RULE_WIDTH: usize = 56;

/// Print a section header and separator.
pub fn section(title: &str) {
    println!();
    println!("{}", title.if_supports_color(Stream::Stdout, |t| t.bold()));
    println!("{}", "─".repeat(RULE_WIDTH));
}

/// Print a simple key/value line.
pub fn key_value(label: &str, value: impl Display) {
    println!("{label:<16} {value}");
}

/// Print a successful status line.
pub fn ok(message: &str) {
    println!("{} {message}", "✓".if_supports_color(Stream::Stdout, |t| t.green()));
}

/// Print a warning status line.
pub fn warn(message: &str) {
    println!("{} {message}", "⚠".if_supports_color(Stream::Stdout, |t| t.yellow()));
}

/// Print an error status line.
pub fn error(message: &str) {
    eprintln!("{} {message}", "✗".if_supports_color(Stream::Stderr, |t| t.red()));
}
