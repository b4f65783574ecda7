//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! output for later assertion.
//!
//! # Example
//!
//! ```
//! use depguide::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.error("Could not import module 'bz2'");
//! ui.diagnostic("Please install bz2 and try again.");
//!
//! assert!(ui.has_error("bz2"));
//! assert_eq!(
//!     ui.stderr(),
//!     "Could not import module 'bz2'\nPlease install bz2 and try again."
//! );
//! ```

use super::UserInterface;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    errors: Vec<String>,
    /// Every stderr line in the order written, whatever its kind.
    stderr_lines: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured primary output lines.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured error headlines.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all stderr lines in order.
    pub fn stderr_lines(&self) -> &[String] {
        &self.stderr_lines
    }

    /// All stderr lines joined with newlines.
    pub fn stderr(&self) -> String {
        self.stderr_lines.join("\n")
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if anything on stderr contains `text`.
    pub fn stderr_contains(&self, text: &str) -> bool {
        self.stderr().contains(text)
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn diagnostic(&mut self, msg: &str) {
        self.stderr_lines.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
        self.stderr_lines.push(msg.to_string());
    }
}
