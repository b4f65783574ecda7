//! Configuration schema definitions for depguide.
//!
//! This module contains the struct definitions that map to the YAML
//! configuration file format.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root configuration structure for depguide.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DepguideConfig {
    /// Name of the application the dependencies belong to
    pub app_name: String,

    /// Base "new issue" URL used when asking users to file a report
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_url: Option<String>,

    /// Preferred Mac package manager (homebrew, macports, fink, pip)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub darwin_manager: Option<String>,

    /// Fixed platform, bypassing detection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<PlatformConfig>,

    /// Dependencies in registration order
    #[serde(default)]
    pub dependencies: Vec<DependencyConfig>,
}

/// A fixed platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlatformConfig {
    /// Distributor tag, e.g. "Ubuntu" or "Darwin_homebrew"
    pub distributor: String,

    /// Human-readable description; defaults to the tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,
}

/// One dependency.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DependencyConfig {
    /// Lookup key: the unit named in "not found" failures
    pub key: String,

    /// Feature the dependency belongs to
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,

    /// Command confirming the dependency is installed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verify: Option<String>,

    /// Installed-version check
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<VersionCheckConfig>,

    /// Install recipes by distributor tag
    #[serde(default)]
    pub recipes: BTreeMap<String, RecipeConfig>,
}

/// How to check the installed version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VersionCheckConfig {
    /// Command whose output contains the version
    pub command: String,

    /// Oldest acceptable version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<String>,
}

/// A recipe: either a bare package manager name or a detailed form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecipeConfig {
    /// `Debian: apt`
    Manager(String),

    /// `Fedora: { manager: dnf, package: bzip2-libs }` or
    /// `Arch: { command: "sudo pacman -S {package}" }`
    Detailed(DetailedRecipeConfig),
}

/// Detailed recipe. Exactly one of `manager` or `command` must be set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DetailedRecipeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,

    /// Command template with a `{package}` placeholder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Package name on this platform
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
}
