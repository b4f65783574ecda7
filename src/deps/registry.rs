//! Dependency registry.
//!
//! Holds the dependencies an application knows how to explain, keyed by the
//! unit name that shows up in "not found" failures. The registry is built
//! once at startup and only read afterwards.

use std::collections::HashMap;

use crate::error::{DepguideError, Result};
use crate::ui::UserInterface;

use super::Dependency;

/// Registry of known dependencies for one application.
#[derive(Debug, Clone)]
pub struct DependencyRegistry {
    owner: String,
    dependencies: HashMap<String, Dependency>,
    /// Keys in first-registration order, for deterministic validation.
    order: Vec<String>,
}

impl DependencyRegistry {
    /// Create an empty registry for the application called `owner`.
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            dependencies: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Name of the application that owns the registry.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Add a dependency, replacing any earlier one with the same key.
    ///
    /// Returns the replaced dependency. A replaced dependency keeps its
    /// original position in validation order.
    pub fn register(&mut self, dependency: Dependency) -> Option<Dependency> {
        let key = dependency.key().to_string();
        let previous = self.dependencies.insert(key.clone(), dependency);
        if previous.is_some() {
            tracing::debug!("Dependency '{}' re-registered, replacing earlier entry", key);
        } else {
            tracing::debug!("Registered dependency '{}'", key);
            self.order.push(key);
        }
        previous
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, dependency: Dependency) -> Self {
        self.register(dependency);
        self
    }

    /// Look up a dependency by key.
    pub fn lookup(&self, key: &str) -> Option<&Dependency> {
        self.dependencies.get(key)
    }

    /// Dependencies in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Dependency> {
        self.order
            .iter()
            .filter_map(|key| self.dependencies.get(key))
    }

    /// Registered keys in registration order.
    pub fn keys(&self) -> Vec<&str> {
        self.order.iter().map(|s| s.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }

    /// Validate every dependency in registration order.
    ///
    /// Stops at the first dependency whose validation fails: explains the
    /// problem on `ui` and returns [`DepguideError::DependencyUnusable`].
    /// Later dependencies are not validated.
    pub fn validate_all(&self, ui: &mut dyn UserInterface) -> Result<()> {
        for dep in self.iter() {
            let Some(message) = dep.validate() else {
                tracing::debug!("Dependency '{}' is usable", dep.key());
                continue;
            };

            tracing::warn!("Dependency '{}' failed validation: {}", dep.key(), message);
            ui.error(&format!("Cannot use module '{}'", dep.key()));
            ui.diagnostic(&format!("This module is part of {}.", dep.name()));
            ui.diagnostic(&format!("The error message was: {}", message));

            return Err(DepguideError::DependencyUnusable {
                key: dep.key().to_string(),
                message,
            });
        }
        Ok(())
    }
}
