//! Dependency descriptors and the registry that holds them.
//!
//! # Modules
//!
//! - [`descriptor`] - One dependency: key, feature name, recipes, validation
//! - [`recipe`] - Per-platform install instructions and package managers
//! - [`registry`] - Key-to-dependency registry with startup validation
//! - [`probe`] - Command-based version lookup

pub mod descriptor;
pub mod probe;
pub mod recipe;
pub mod registry;

pub use descriptor::Dependency;
pub use probe::CommandVersionProbe;
pub use recipe::{tags, PackageManager, Recipe, RecipeRequest};
pub use registry::DependencyRegistry;
