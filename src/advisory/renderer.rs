//! Advisory rendering.
//!
//! Writes the message a user sees after a registered dependency failed to
//! load: what is missing, which feature needs it, and how to install it on
//! their platform. When there is no recipe for the platform, or the platform
//! is unknown, the user is asked to file a report instead.

use crate::deps::{Dependency, DependencyRegistry};
use crate::error::Result;
use crate::platform::PlatformResolver;
use crate::report::{missing_recipe_summary, unknown_platform_summary, Reporter};
use crate::ui::UserInterface;

/// Composes advisory messages from a dependency and the current platform.
pub struct AdvisoryRenderer<'a> {
    resolver: &'a dyn PlatformResolver,
    reporter: &'a dyn Reporter,
}

impl<'a> AdvisoryRenderer<'a> {
    pub fn new(resolver: &'a dyn PlatformResolver, reporter: &'a dyn Reporter) -> Self {
        Self { resolver, reporter }
    }

    /// Write the advisory for `dep` to the diagnostic stream.
    ///
    /// The reporter is only consulted when no recipe applies. If it fails,
    /// the error is returned and the advisory stops there.
    pub fn render(
        &self,
        dep: &Dependency,
        registry: &DependencyRegistry,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        ui.error(&format!("Could not import module '{}'", dep.key()));
        ui.diagnostic(&format!("This module is part of {}.", dep.name()));

        if let Some(homepage) = dep.homepage() {
            ui.diagnostic(&format!("See {} for more information.", homepage));
            ui.diagnostic("");
        }

        match self.resolver.resolve() {
            Some(platform) => match dep.install(&platform) {
                Some(howto) => ui.diagnostic(&howto),
                None => {
                    tracing::debug!(
                        "No recipe for '{}' on {}",
                        dep.key(),
                        platform.distributor
                    );
                    let summary = missing_recipe_summary(dep.key(), &platform.description);
                    let url = self.reporter.report_reference(&summary)?;
                    ui.diagnostic(&format!(
                        "On {}, {} does not know how to install {}.",
                        platform.description,
                        registry.owner(),
                        dep.key()
                    ));
                    ui.diagnostic("Please file a bug at:");
                    ui.diagnostic(&format!("  {}", url));
                    ui.diagnostic(
                        "with instructions on how to install the dependency so we can add it.",
                    );
                }
            },
            None => {
                let url = self.reporter.report_reference(&unknown_platform_summary())?;
                ui.diagnostic(&format!(
                    "{} does not know your distribution.",
                    registry.owner()
                ));
                ui.diagnostic("Please file a bug at:");
                ui.diagnostic(&format!("  {}", url));
                ui.diagnostic(
                    "with instructions on how to recognize your distribution so we can add it.",
                );
            }
        }

        ui.diagnostic("");
        ui.diagnostic(&format!("Please install {} and try again.", dep.key()));

        if let Some(verify) = dep.verify_command() {
            ui.diagnostic("");
            ui.diagnostic("You can confirm it is installed by running:");
            ui.diagnostic(&format!("  {}", verify));
        }

        Ok(())
    }
}
