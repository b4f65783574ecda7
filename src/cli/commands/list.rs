//! List command implementation.
//!
//! The `depguide list` command lists registered dependencies and the
//! platforms each one has an install recipe for.

use serde::Serialize;

use crate::cli::args::ListArgs;
use crate::deps::Dependency;
use crate::error::{DepguideError, Result};
use crate::ui::{DepguideTheme, UserInterface};

use super::context::AppContext;
use super::dispatcher::{Command, CommandResult};

/// One dependency in `--json` output.
#[derive(Debug, Serialize)]
struct DependencySummary<'a> {
    key: &'a str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    homepage: Option<&'a str>,
    recipes: Vec<&'a str>,
}

impl<'a> From<&'a Dependency> for DependencySummary<'a> {
    fn from(dep: &'a Dependency) -> Self {
        Self {
            key: dep.key(),
            name: dep.name(),
            homepage: dep.homepage(),
            recipes: dep.recipe_tags(),
        }
    }
}

/// The list command implementation.
pub struct ListCommand<'a> {
    context: &'a AppContext,
    args: ListArgs,
}

impl<'a> ListCommand<'a> {
    /// Create a new list command.
    pub fn new(context: &'a AppContext, args: ListArgs) -> Self {
        Self { context, args }
    }
}

impl Command for ListCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = &self.context.registry;

        if self.args.json {
            let summaries: Vec<DependencySummary<'_>> = registry.iter().map(Into::into).collect();
            let json = serde_json::to_string_pretty(&summaries)
                .map_err(|e| DepguideError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        if registry.is_empty() {
            ui.message(&format!("No dependencies registered for {}.", registry.owner()));
            return Ok(CommandResult::success());
        }

        let theme = DepguideTheme::new();
        ui.message(&format!(
            "  {}",
            theme.key.apply_to(format!("{} dependencies:", registry.owner()))
        ));
        for dep in registry.iter() {
            ui.message(&format!(
                "    {} {}",
                theme.highlight.apply_to(dep.key()),
                theme.dim.apply_to(format!("({})", dep.name()))
            ));
            let tags = dep.recipe_tags();
            let recipes = if tags.is_empty() {
                "none".to_string()
            } else {
                tags.join(", ")
            };
            ui.message(&format!("      recipes: {}", recipes));
        }

        Ok(CommandResult::success())
    }
}
