//! Interpretation of "not found" failures.
//!
//! The interpreter recognises exactly one failure shape: a message starting
//! with [`NOT_FOUND_PREFIX`] followed by the name of the unit that could not
//! be loaded. Anything else, and any unit the registry does not know, is
//! handed back untouched so the caller can deal with it as before.

use std::fmt;

use crate::deps::DependencyRegistry;
use crate::error::Result;
use crate::platform::PlatformResolver;
use crate::report::Reporter;
use crate::ui::UserInterface;

use super::AdvisoryRenderer;

/// Message prefix of a "unit not found" failure.
pub const NOT_FOUND_PREFIX: &str = "No module named ";

/// Separator between namespace segments of a unit name.
pub const NAMESPACE_SEPARATOR: char = '.';

/// A failure that carries a message.
pub trait LoadFailure {
    fn message(&self) -> &str;
}

impl LoadFailure for String {
    fn message(&self) -> &str {
        self
    }
}

impl LoadFailure for &str {
    fn message(&self) -> &str {
        self
    }
}

/// A "unit not found" failure raised by the embedding application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleNotFound {
    message: String,
}

impl ModuleNotFound {
    /// Failure for a unit name, in the canonical form.
    pub fn new(unit: &str) -> Self {
        Self {
            message: format!("{}{}", NOT_FOUND_PREFIX, unit),
        }
    }

    /// Failure with an arbitrary message.
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl LoadFailure for ModuleNotFound {
    fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ModuleNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ModuleNotFound {}

/// Why a failure was passed through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Passthrough {
    /// The message is not a "unit not found" message.
    UnknownShape,
    /// The unit is not registered. Usually a bug in the embedding application.
    Unregistered { key: String },
}

/// Outcome of interpreting a failure.
#[derive(Debug)]
pub enum Interpretation<F> {
    /// An advisory was written; the original failure is consumed.
    Handled { key: String },
    /// Not ours. The original failure is returned unchanged.
    NotApplicable { failure: F, reason: Passthrough },
}

impl<F> Interpretation<F> {
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled { .. })
    }

    /// The passed-through failure, if any.
    pub fn into_failure(self) -> Option<F> {
        match self {
            Self::Handled { .. } => None,
            Self::NotApplicable { failure, .. } => Some(failure),
        }
    }
}

/// Extract the unit named in a "not found" message.
///
/// The message must start with [`NOT_FOUND_PREFIX`]. Surrounding quotes
/// around the unit are dropped.
pub fn missing_unit(message: &str) -> Option<&str> {
    let rest = message.strip_prefix(NOT_FOUND_PREFIX)?.trim();
    let unit = rest
        .strip_prefix('\'')
        .and_then(|r| r.strip_suffix('\''))
        .or_else(|| rest.strip_prefix('"').and_then(|r| r.strip_suffix('"')))
        .unwrap_or(rest);
    if unit.is_empty() {
        None
    } else {
        Some(unit)
    }
}

/// Registry key for a unit: its top-level namespace segment.
pub fn lookup_key(unit: &str) -> &str {
    unit.split(NAMESPACE_SEPARATOR).next().unwrap_or(unit)
}

/// Turns recognised "not found" failures into advisories.
pub struct FailureInterpreter<'a> {
    registry: &'a DependencyRegistry,
    renderer: AdvisoryRenderer<'a>,
}

impl<'a> FailureInterpreter<'a> {
    pub fn new(
        registry: &'a DependencyRegistry,
        resolver: &'a dyn PlatformResolver,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self {
            registry,
            renderer: AdvisoryRenderer::new(resolver, reporter),
        }
    }

    /// Interpret `failure`, writing an advisory to `ui` if it is ours.
    ///
    /// Errors only come from the reporter; a failure that is not ours is
    /// never an error.
    pub fn interpret<F: LoadFailure>(
        &self,
        failure: F,
        ui: &mut dyn UserInterface,
    ) -> Result<Interpretation<F>> {
        let Some(unit) = missing_unit(failure.message()) else {
            return Ok(Interpretation::NotApplicable {
                failure,
                reason: Passthrough::UnknownShape,
            });
        };

        let key = lookup_key(unit).to_string();
        let Some(dep) = self.registry.lookup(&key) else {
            tracing::debug!("Unit '{}' is not a registered dependency", key);
            return Ok(Interpretation::NotApplicable {
                failure,
                reason: Passthrough::Unregistered { key },
            });
        };

        self.renderer.render(dep, self.registry, ui)?;
        Ok(Interpretation::Handled { key })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deps::{tags, Dependency, Recipe};
    use crate::platform::{Platform, StaticResolver};
    use crate::report::StaticReporter;
    use crate::ui::MockUI;

    struct Fixture {
        registry: DependencyRegistry,
        resolver: StaticResolver,
        reporter: StaticReporter,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                registry: DependencyRegistry::new("Flumotion")
                    .with(Dependency::new("gi", "GObject Introspection").with_recipe(
                        tags::DEBIAN,
                        Recipe::apt("Debian").with_package("python3-gi"),
                    ))
                    .with(Dependency::new("bz2", "Compression Support")),
                resolver: StaticResolver::new(Platform::new(tags::DEBIAN, "Debian 12")),
                reporter: StaticReporter::new("https://bugs.example.org"),
            }
        }

        fn interpreter(&self) -> FailureInterpreter<'_> {
            FailureInterpreter::new(&self.registry, &self.resolver, &self.reporter)
        }
    }

    #[test]
    fn missing_unit_requires_prefix_at_start() {
        assert_eq!(missing_unit("No module named bz2"), Some("bz2"));
        assert_eq!(missing_unit("ImportError: No module named bz2"), None);
        assert_eq!(missing_unit("no module named bz2"), None);
        assert_eq!(missing_unit("No module named"), None);
        assert_eq!(missing_unit("No module named "), None);
    }

    #[test]
    fn missing_unit_strips_quotes() {
        assert_eq!(missing_unit("No module named 'gi.repository'"), Some("gi.repository"));
        assert_eq!(missing_unit("No module named \"bz2\"\n"), Some("bz2"));
        assert_eq!(missing_unit("No module named 'odd"), Some("'odd"));
    }

    #[test]
    fn lookup_key_keeps_top_level_segment() {
        assert_eq!(lookup_key("a.b.c"), "a");
        assert_eq!(lookup_key("bz2"), "bz2");
        assert_eq!(lookup_key(".hidden"), "");
    }

    #[test]
    fn handles_registered_unit() {
        let fixture = Fixture::new();
        let mut ui = MockUI::new();

        let outcome = fixture
            .interpreter()
            .interpret("No module named gi.repository.Gst", &mut ui)
            .unwrap();

        assert!(outcome.is_handled());
        assert!(matches!(outcome, Interpretation::Handled { ref key } if key == "gi"));
        assert!(ui.has_error("Could not import module 'gi'"));
        assert!(ui.stderr_contains("sudo apt-get install python3-gi"));
    }

    #[test]
    fn passes_through_unknown_shape_unchanged() {
        let fixture = Fixture::new();
        let mut ui = MockUI::new();
        let failure = ModuleNotFound::from_message("cannot open shared object file");

        let outcome = fixture
            .interpreter()
            .interpret(failure.clone(), &mut ui)
            .unwrap();

        match outcome {
            Interpretation::NotApplicable { failure: back, reason } => {
                assert_eq!(back, failure);
                assert_eq!(reason, Passthrough::UnknownShape);
            }
            Interpretation::Handled { .. } => panic!("Expected NotApplicable"),
        }
        assert!(ui.stderr_lines().is_empty());
    }

    #[test]
    fn passes_through_unregistered_unit() {
        let fixture = Fixture::new();
        let mut ui = MockUI::new();

        let outcome = fixture
            .interpreter()
            .interpret(String::from("No module named zope.interface"), &mut ui)
            .unwrap();

        match outcome {
            Interpretation::NotApplicable { failure, reason } => {
                assert_eq!(failure, "No module named zope.interface");
                assert_eq!(
                    reason,
                    Passthrough::Unregistered {
                        key: "zope".to_string()
                    }
                );
            }
            Interpretation::Handled { .. } => panic!("Expected NotApplicable"),
        }
        assert!(ui.stderr_lines().is_empty());
    }

    #[test]
    fn namespaced_unit_only_looks_up_top_level() {
        let mut fixture = Fixture::new();
        fixture
            .registry
            .register(Dependency::new("a.b", "Should never match"));
        let mut ui = MockUI::new();

        let outcome = fixture
            .interpreter()
            .interpret("No module named a.b.c", &mut ui)
            .unwrap();

        assert!(matches!(
            outcome,
            Interpretation::NotApplicable {
                reason: Passthrough::Unregistered { ref key },
                ..
            } if key == "a"
        ));
    }

    #[test]
    fn into_failure_returns_original() {
        let outcome: Interpretation<&str> = Interpretation::NotApplicable {
            failure: "boom",
            reason: Passthrough::UnknownShape,
        };
        assert_eq!(outcome.into_failure(), Some("boom"));

        let handled: Interpretation<&str> = Interpretation::Handled { key: "x".into() };
        assert!(handled.into_failure().is_none());
    }

    #[test]
    fn module_not_found_displays_message() {
        let err = ModuleNotFound::new("bz2");
        assert_eq!(err.to_string(), "No module named bz2");
        assert_eq!(err.message(), "No module named bz2");
    }
}
