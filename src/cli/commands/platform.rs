//! Platform command implementation.
//!
//! The `depguide platform` command shows what the advisories will assume
//! about the running machine.

use crate::cli::args::PlatformArgs;
use crate::error::{DepguideError, Result};
use crate::platform::PlatformResolver;
use crate::ui::{DepguideTheme, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The platform command implementation.
pub struct PlatformCommand<'a> {
    resolver: &'a dyn PlatformResolver,
    args: PlatformArgs,
}

impl<'a> PlatformCommand<'a> {
    /// Create a new platform command.
    pub fn new(resolver: &'a dyn PlatformResolver, args: PlatformArgs) -> Self {
        Self { resolver, args }
    }
}

impl Command for PlatformCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let platform = self.resolver.resolve();

        if self.args.json {
            let json = serde_json::to_string_pretty(&platform)
                .map_err(|e| DepguideError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        let Some(platform) = platform else {
            ui.message("unknown");
            return Ok(CommandResult::success());
        };

        let theme = DepguideTheme::new();
        ui.message(&theme.format_field("distributor", &platform.distributor));
        ui.message(&theme.format_field("description", &platform.description));
        if let Some(release) = &platform.release {
            ui.message(&theme.format_field("release", release));
        }
        if let Some(arch) = &platform.arch {
            ui.message(&theme.format_field("arch", arch));
        }

        Ok(CommandResult::success())
    }
}
