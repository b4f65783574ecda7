//! Configuration loading and parsing for depguide.
//!
//! This module handles:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Conversion into a registry and collaborators in [`builder`]
//!
//! # Example
//!
//! ```
//! use depguide::config::{build_registry, load_config_file};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("depguide.yml");
//! let yaml = "app_name: Flumotion\ndependencies:\n  - key: bz2\n    name: Compression Support\n";
//! fs::write(&path, yaml).unwrap();
//!
//! let config = load_config_file(&path).unwrap();
//! let registry = build_registry(&config).unwrap();
//! assert!(registry.lookup("bz2").is_some());
//! ```

pub mod builder;
pub mod loader;
pub mod schema;

pub use builder::{
    build_dependency, build_registry, build_reporter, build_resolver, darwin_manager,
    platform_override,
};
pub use loader::{discover_config, load_config, load_config_file, parse_config, CONFIG_ENV};
pub use schema::{
    DepguideConfig, DependencyConfig, DetailedRecipeConfig, PlatformConfig, RecipeConfig,
    VersionCheckConfig,
};
