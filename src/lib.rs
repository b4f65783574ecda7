//! depguide - Explain missing dependencies and how to install them.
//!
//! An application registers the optional dependencies it can live without.
//! When loading one fails with a "not found" error, depguide turns that
//! failure into an advisory: which feature needs the dependency, where to
//! read about it, and the command that installs it on the user's platform.
//!
//! # Modules
//!
//! - [`advisory`] - Failure interpretation and advisory rendering
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and registry construction
//! - [`deps`] - Dependency descriptors, install recipes and the registry
//! - [`error`] - Error types and result aliases
//! - [`platform`] - Platform descriptors and resolution
//! - [`report`] - Report links for unsupported platforms
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use depguide::config::{build_registry, parse_config};
//! use depguide::ui::MockUI;
//! use std::path::Path;
//!
//! let yaml = r#"
//! app_name: Flumotion
//! dependencies:
//!   - key: bz2
//!     name: Compression Support
//!     recipes:
//!       Debian: apt
//!       Fedora: { manager: yum, package: bzip2-libs }
//! "#;
//! let config = parse_config(yaml, Path::new("depguide.yml")).unwrap();
//! let registry = build_registry(&config).unwrap();
//!
//! let mut ui = MockUI::new();
//! assert!(registry.validate_all(&mut ui).is_ok());
//! assert_eq!(registry.lookup("bz2").unwrap().recipe_tags(), vec!["Debian", "Fedora"]);
//! ```
//!
//! See [`advisory`] for turning a failure into an advisory.

pub mod advisory;
pub mod cli;
pub mod config;
pub mod deps;
pub mod error;
pub mod platform;
pub mod report;
pub mod ui;

pub use error::{DepguideError, Result};
