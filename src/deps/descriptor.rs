//! Dependency descriptors.
//!
//! A [`Dependency`] describes one unit the embedding application may fail to
//! load: its lookup key, the feature it belongs to, and how to install it on
//! each known distributor tag.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::platform::{version, Platform};

use super::probe::CommandVersionProbe;
use super::recipe::{Recipe, RecipeRequest};

type ValidateFn = dyn Fn(&Dependency) -> Option<String> + Send + Sync;
type VersionFn = dyn Fn() -> Option<String> + Send + Sync;

/// A dependency the application knows how to explain.
#[derive(Clone)]
pub struct Dependency {
    key: String,
    name: String,
    homepage: Option<String>,
    verify: Option<String>,
    recipes: HashMap<String, Recipe>,
    version_lookup: Option<Arc<VersionFn>>,
    minimum_version: Option<String>,
    validator: Option<Arc<ValidateFn>>,
}

impl Dependency {
    /// Create a dependency with a lookup key and the feature name it belongs to.
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            homepage: None,
            verify: None,
            recipes: HashMap::new(),
            version_lookup: None,
            minimum_version: None,
            validator: None,
        }
    }

    pub fn with_homepage(mut self, homepage: impl Into<String>) -> Self {
        self.homepage = Some(homepage.into());
        self
    }

    /// Command the user can run to confirm the install worked.
    pub fn with_verify_command(mut self, command: impl Into<String>) -> Self {
        self.verify = Some(command.into());
        self
    }

    /// Register the recipe for a distributor tag, replacing any earlier one.
    pub fn with_recipe(mut self, tag: impl Into<String>, recipe: Recipe) -> Self {
        self.recipes.insert(tag.into(), recipe);
        self
    }

    /// Hook returning the installed version, if it can be determined.
    pub fn with_version_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn() -> Option<String> + Send + Sync + 'static,
    {
        self.version_lookup = Some(Arc::new(lookup));
        self
    }

    /// Look the installed version up by running a command.
    pub fn with_version_command(self, command: &str) -> Self {
        let probe = CommandVersionProbe::from_string(command);
        self.with_version_lookup(move || probe.version())
    }

    /// Oldest acceptable version; checked by the default validation.
    pub fn with_minimum_version(mut self, minimum: impl Into<String>) -> Self {
        self.minimum_version = Some(minimum.into());
        self
    }

    /// Replace the default validation.
    pub fn with_validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&Dependency) -> Option<String> + Send + Sync + 'static,
    {
        self.validator = Some(Arc::new(validator));
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn homepage(&self) -> Option<&str> {
        self.homepage.as_deref()
    }

    pub fn verify_command(&self) -> Option<&str> {
        self.verify.as_deref()
    }

    pub fn minimum_version(&self) -> Option<&str> {
        self.minimum_version.as_deref()
    }

    /// Distributor tags with a recipe, sorted.
    pub fn recipe_tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.recipes.keys().map(|s| s.as_str()).collect();
        tags.sort_unstable();
        tags
    }

    pub fn recipe(&self, tag: &str) -> Option<&Recipe> {
        self.recipes.get(tag)
    }

    /// Install instructions for `platform`, using the default package name.
    ///
    /// Returns `None` when no recipe is registered for the platform's
    /// distributor tag. Only an exact tag match counts; picking among several
    /// Mac managers is the resolver's job.
    pub fn install(&self, platform: &Platform) -> Option<String> {
        self.install_as(platform, None)
    }

    /// Install instructions for `platform` with an explicit package name.
    ///
    /// The package is `package` if given, else the recipe's own package
    /// name, else the dependency key.
    pub fn install_as(&self, platform: &Platform, package: Option<&str>) -> Option<String> {
        let recipe = self.recipes.get(&platform.distributor)?;
        let package = package.or(recipe.package()).unwrap_or(self.key.as_str());
        Some(recipe.render(&RecipeRequest {
            module: &self.key,
            package,
        }))
    }

    /// The installed version, if a lookup hook is set and it finds one.
    pub fn version(&self) -> Option<String> {
        self.version_lookup.as_ref().and_then(|lookup| lookup())
    }

    /// Check that the dependency is usable.
    ///
    /// Returns `None` when it is, or an explanation when it is not. Without
    /// a custom validator, the installed version is compared against the
    /// minimum version; an undeterminable version passes.
    pub fn validate(&self) -> Option<String> {
        if let Some(validator) = &self.validator {
            return validator(self);
        }

        let minimum = self.minimum_version.as_deref()?;
        let installed = self.version()?;
        if version::at_least(&installed, minimum) {
            None
        } else {
            Some(format!(
                "installed version {} is older than the required {}",
                installed, minimum
            ))
        }
    }
}

impl fmt::Debug for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dependency")
            .field("key", &self.key)
            .field("name", &self.name)
            .field("homepage", &self.homepage)
            .field("recipes", &self.recipe_tags())
            .field("minimum_version", &self.minimum_version)
            .finish_non_exhaustive()
    }
}
