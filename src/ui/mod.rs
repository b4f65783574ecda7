//! Console output.
//!
//! This module provides:
//! - [`UserInterface`] trait separating primary output from diagnostics
//! - [`TerminalUI`] writing to stdout and stderr
//! - [`MockUI`] recording everything for assertions
//!
//! Advisory text is diagnostic output: it always goes to stderr, never to
//! primary output.

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, DepguideTheme};

/// Trait for user-facing output.
///
/// This trait allows mocking the console in tests.
pub trait UserInterface {
    /// Write a line of primary output (stdout).
    fn message(&mut self, msg: &str);

    /// Write a line of diagnostic text (stderr).
    fn diagnostic(&mut self, msg: &str);

    /// Write a diagnostic headline for a failure (stderr).
    fn error(&mut self, msg: &str);
}
