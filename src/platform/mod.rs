//! Platform identification.
//!
//! The advisory layer only needs to know which distributor tag applies and
//! how to describe the platform to a human. That knowledge comes from a
//! [`PlatformResolver`]:
//!
//! - [`SystemResolver`] inspects the running machine
//! - [`StaticResolver`] returns a fixed answer (overrides and tests)
//!
//! An unknown platform is a normal answer (`None`), not an error.

pub mod detection;
pub mod version;

pub use detection::SystemResolver;

use serde::Serialize;

/// The platform a dependency should be installed on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Platform {
    /// Tag used to select an install recipe (e.g. "Debian", "Darwin_homebrew").
    pub distributor: String,
    /// Human-readable summary, e.g. "Ubuntu 22.04.3 LTS".
    pub description: String,
    /// Release of the distribution, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,
    /// Machine architecture, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arch: Option<String>,
}

impl Platform {
    /// Create a platform with a tag and description.
    pub fn new(distributor: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            distributor: distributor.into(),
            description: description.into(),
            release: None,
            arch: None,
        }
    }

    pub fn with_release(mut self, release: impl Into<String>) -> Self {
        self.release = Some(release.into());
        self
    }

    pub fn with_arch(mut self, arch: impl Into<String>) -> Self {
        self.arch = Some(arch.into());
        self
    }

    /// Whether this platform's release is at least `release`.
    ///
    /// A platform with no known release is never "at least" anything.
    pub fn at_least(&self, release: &str) -> bool {
        self.release
            .as_deref()
            .is_some_and(|mine| version::at_least(mine, release))
    }
}

/// Identifies the platform the process is running on.
pub trait PlatformResolver {
    /// The current platform, or `None` if it cannot be recognised.
    fn resolve(&self) -> Option<Platform>;
}

/// Resolver with a fixed answer.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    platform: Option<Platform>,
}

impl StaticResolver {
    /// Always resolve to `platform`.
    pub fn new(platform: Platform) -> Self {
        Self {
            platform: Some(platform),
        }
    }

    /// Never recognise the platform.
    pub fn unknown() -> Self {
        Self { platform: None }
    }
}

impl PlatformResolver for StaticResolver {
    fn resolve(&self) -> Option<Platform> {
        self.platform.clone()
    }
}
