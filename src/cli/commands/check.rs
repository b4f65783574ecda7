//! Check command implementation.
//!
//! The `depguide check` command validates every registered dependency and
//! stops at the first one that is unusable.

use crate::error::{DepguideError, Result};
use crate::ui::UserInterface;

use super::context::AppContext;
use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand<'a> {
    context: &'a AppContext,
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command.
    pub fn new(context: &'a AppContext) -> Self {
        Self { context }
    }
}

impl Command for CheckCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = &self.context.registry;
        match registry.validate_all(ui) {
            Ok(()) => {
                ui.message(&format!(
                    "All {} dependencies of {} are usable.",
                    registry.len(),
                    registry.owner()
                ));
                Ok(CommandResult::success())
            }
            Err(DepguideError::DependencyUnusable { .. }) => Ok(CommandResult::failure(1)),
            Err(e) => Err(e),
        }
    }
}
