//! Explain command implementation.
//!
//! The `depguide explain` command runs the failure interpreter on a message
//! and prints the advisory, or echoes the message back when it is not one
//! depguide can explain.

use crate::advisory::{FailureInterpreter, Interpretation};
use crate::cli::args::ExplainArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::context::AppContext;
use super::dispatcher::{Command, CommandResult};

/// Exit code when the message is passed through unexplained.
pub const NOT_APPLICABLE_EXIT_CODE: i32 = 2;

/// The explain command implementation.
pub struct ExplainCommand<'a> {
    context: &'a AppContext,
    args: ExplainArgs,
}

impl<'a> ExplainCommand<'a> {
    /// Create a new explain command.
    pub fn new(context: &'a AppContext, args: ExplainArgs) -> Self {
        Self { context, args }
    }
}

impl Command for ExplainCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let interpreter = FailureInterpreter::new(
            &self.context.registry,
            self.context.resolver.as_ref(),
            &self.context.reporter,
        );

        match interpreter.interpret(self.args.message.as_str(), ui)? {
            Interpretation::Handled { .. } => Ok(CommandResult::success()),
            Interpretation::NotApplicable { failure, .. } => {
                ui.diagnostic(failure);
                Ok(CommandResult::failure(NOT_APPLICABLE_EXIT_CODE))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DepguideConfig;
    use crate::platform::Platform;
    use crate::ui::MockUI;

    fn context() -> AppContext {
        let config: DepguideConfig = serde_yaml::from_str(
            r#"
app_name: Flumotion
report_url: https://bugs.example.org/new
dependencies:
  - key: bz2
    name: Compression Support
    recipes:
      Ubuntu: apt
"#,
        )
        .unwrap();
        AppContext::from_config(&config, Some(Platform::new("Ubuntu", "Ubuntu 22.04"))).unwrap()
    }

    fn explain(ctx: &AppContext, message: &str, ui: &mut MockUI) -> CommandResult {
        ExplainCommand::new(
            ctx,
            ExplainArgs {
                message: message.to_string(),
            },
        )
        .execute(ui)
        .unwrap()
    }

    #[test]
    fn explains_registered_module() {
        let ctx = context();
        let mut ui = MockUI::new();

        let result = explain(&ctx, "No module named bz2", &mut ui);

        assert!(result.success);
        assert!(ui.stderr_contains("sudo apt-get install bz2"));
        assert!(ui.stderr_contains("Please install bz2 and try again."));
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn echoes_unknown_message() {
        let ctx = context();
        let mut ui = MockUI::new();

        let result = explain(&ctx, "Segmentation fault", &mut ui);

        assert_eq!(result.exit_code, NOT_APPLICABLE_EXIT_CODE);
        assert_eq!(ui.stderr(), "Segmentation fault");
    }

    #[test]
    fn echoes_unregistered_module() {
        let ctx = context();
        let mut ui = MockUI::new();

        let result = explain(&ctx, "No module named twisted.web", &mut ui);

        assert!(!result.success);
        assert_eq!(ui.stderr(), "No module named twisted.web");
    }
}
