//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, DepguideTheme, UserInterface};

/// Console implementation: primary output on stdout, diagnostics on stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: DepguideTheme,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            DepguideTheme::new()
        } else {
            DepguideTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
        }
    }

}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn diagnostic(&mut self, msg: &str) {
        writeln!(self.err, "{}", msg).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }
}
