//! Missing-dependency advisories.
//!
//! Data flows one way: a failure reaches the [`FailureInterpreter`], which
//! looks the unit up in the registry and, if it is known, has the
//! [`AdvisoryRenderer`] explain how to install it on the current platform.
//!
//! # Example
//!
//! ```
//! use depguide::advisory::{FailureInterpreter, Interpretation};
//! use depguide::deps::{tags, Dependency, DependencyRegistry, Recipe};
//! use depguide::platform::{Platform, StaticResolver};
//! use depguide::report::StaticReporter;
//! use depguide::ui::MockUI;
//!
//! let registry = DependencyRegistry::new("Flumotion").with(
//!     Dependency::new("bz2", "Compression Support")
//!         .with_recipe(tags::UBUNTU, Recipe::apt("Ubuntu")),
//! );
//! let resolver = StaticResolver::new(Platform::new("Ubuntu", "Ubuntu 22.04"));
//! let reporter = StaticReporter::new("https://bugs.example.org");
//! let interpreter = FailureInterpreter::new(&registry, &resolver, &reporter);
//!
//! let mut ui = MockUI::new();
//! let outcome = interpreter.interpret("No module named bz2", &mut ui).unwrap();
//! assert!(outcome.is_handled());
//! assert!(ui.stderr_contains("sudo apt-get install bz2"));
//! ```

pub mod interpreter;
pub mod renderer;

pub use interpreter::{
    lookup_key, missing_unit, FailureInterpreter, Interpretation, LoadFailure, ModuleNotFound,
    Passthrough, NAMESPACE_SEPARATOR, NOT_FOUND_PREFIX,
};
pub use renderer::AdvisoryRenderer;
