//! Shared setup for commands that need the configuration.

use std::path::Path;

use crate::config::{build_registry, build_reporter, build_resolver, load_config, DepguideConfig};
use crate::deps::DependencyRegistry;
use crate::error::Result;
use crate::platform::{Platform, PlatformResolver};
use crate::report::IssueTrackerReporter;

/// Everything built from the configuration file.
pub struct AppContext {
    pub registry: DependencyRegistry,
    pub resolver: Box<dyn PlatformResolver>,
    pub reporter: IssueTrackerReporter,
}

impl AppContext {
    /// Load the configuration and build the registry and collaborators.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` when there is no config file, and the
    /// parse or validation error when it is unusable.
    pub fn load(
        config_path: Option<&Path>,
        working_dir: &Path,
        platform: Option<Platform>,
    ) -> Result<Self> {
        let config = load_config(config_path, working_dir)?;
        Self::from_config(&config, platform)
    }

    /// Build from an already loaded configuration.
    pub fn from_config(config: &DepguideConfig, platform: Option<Platform>) -> Result<Self> {
        let registry = build_registry(config)?;
        let resolver = build_resolver(Some(config), platform)?;
        let reporter = build_reporter(config);
        tracing::debug!(
            "Loaded {} dependencies for {}",
            registry.len(),
            registry.owner()
        );

        Ok(Self {
            registry,
            resolver,
            reporter,
        })
    }
}
