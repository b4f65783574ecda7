//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, PlatformArgs};
use crate::config::{build_resolver, load_config};
use crate::error::{DepguideError, Result};
use crate::ui::UserInterface;

use super::context::AppContext;

/// Exit code for a missing configuration file.
pub const CONFIG_NOT_FOUND_EXIT_CODE: i32 = 2;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for primary output and diagnostics
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    working_dir: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher that discovers config files in `working_dir`.
    pub fn new(working_dir: PathBuf) -> Self {
        Self { working_dir }
    }

    /// Get the working directory.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Explain(args) => self.with_context(cli, ui, |context, ui| {
                super::explain::ExplainCommand::new(context, args.clone()).execute(ui)
            }),
            Commands::Check => self.with_context(cli, ui, |context, ui| {
                super::check::CheckCommand::new(context).execute(ui)
            }),
            Commands::List(args) => self.with_context(cli, ui, |context, ui| {
                super::list::ListCommand::new(context, args.clone()).execute(ui)
            }),
            Commands::Platform(args) => self.dispatch_platform(cli, args, ui),
        }
    }

    /// Run a command that needs the loaded configuration.
    fn with_context<F>(
        &self,
        cli: &Cli,
        ui: &mut dyn UserInterface,
        run: F,
    ) -> Result<CommandResult>
    where
        F: FnOnce(&AppContext, &mut dyn UserInterface) -> Result<CommandResult>,
    {
        match self.load_context(cli, ui)? {
            Some(context) => run(&context, ui),
            None => Ok(CommandResult::failure(CONFIG_NOT_FOUND_EXIT_CODE)),
        }
    }

    /// Load the configuration, reporting a missing file on `ui`.
    fn load_context(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<Option<AppContext>> {
        match AppContext::load(
            cli.config.as_deref(),
            &self.working_dir,
            cli.platform_override(),
        ) {
            Ok(context) => Ok(Some(context)),
            Err(DepguideError::ConfigNotFound { path }) => {
                ui.error(&format!(
                    "No configuration found at {}. Create depguide.yml or pass --config.",
                    path.display()
                ));
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// `platform` works without a config file.
    fn dispatch_platform(
        &self,
        cli: &Cli,
        args: &PlatformArgs,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let config = match load_config(cli.config.as_deref(), &self.working_dir) {
            Ok(config) => Some(config),
            Err(DepguideError::ConfigNotFound { .. }) => None,
            Err(e) => return Err(e),
        };
        let resolver = build_resolver(config.as_ref(), cli.platform_override())?;
        super::platform::PlatformCommand::new(resolver.as_ref(), args.clone()).execute(ui)
    }
}
