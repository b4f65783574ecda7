//! Built-in platform detection.
//!
//! Linux distributions are recognised from `os-release`, falling back to
//! `lsb_release`. On macOS there is no distribution, but there are several
//! competing package managers, so the distributor tag names the manager
//! (`Darwin_homebrew`, `Darwin_macports`, ...). Exactly one manager is
//! picked: the configured preference, else the first one found on PATH.

use std::path::PathBuf;
use std::process::Command;

use crate::deps::recipe::PackageManager;

use super::{Platform, PlatformResolver};

/// Known distribution identifiers and the tag recipes are registered under.
const DISTRIBUTOR_TAGS: &[(&str, &str)] = &[
    ("fedora", "Fedora"),
    ("fedoracore", "Fedora"),
    ("debian", "Debian"),
    ("ubuntu", "Ubuntu"),
    ("arch", "Arch"),
    ("archlinux", "Arch"),
    ("opensuse", "openSUSE"),
    ("opensuse-leap", "openSUSE"),
    ("opensuse-tumbleweed", "openSUSE"),
    ("centos", "CentOS"),
    ("rhel", "RedHat"),
    ("redhatenterpriseserver", "RedHat"),
    ("linuxmint", "LinuxMint"),
    ("alpine", "Alpine"),
];

/// Mac managers in detection order, with the command proving each is present.
const DARWIN_MANAGERS: &[(PackageManager, &str)] = &[
    (PackageManager::Homebrew, "brew --version"),
    (PackageManager::MacPorts, "port version"),
    (PackageManager::Fink, "fink --version"),
];

/// Resolves the platform of the running machine.
#[derive(Debug, Clone)]
pub struct SystemResolver {
    darwin_manager: Option<PackageManager>,
    os_release_paths: Vec<PathBuf>,
}

impl SystemResolver {
    /// Create a resolver using the standard `os-release` locations.
    pub fn new() -> Self {
        Self {
            darwin_manager: None,
            os_release_paths: vec![
                PathBuf::from("/etc/os-release"),
                PathBuf::from("/usr/lib/os-release"),
            ],
        }
    }

    /// Prefer this manager on macOS instead of probing PATH.
    pub fn with_darwin_manager(mut self, manager: PackageManager) -> Self {
        self.darwin_manager = Some(manager);
        self
    }

    /// Read `os-release` from this file only.
    pub fn with_os_release_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.os_release_paths = vec![path.into()];
        self
    }

    /// Resolve as a Linux machine.
    pub fn resolve_linux(&self) -> Option<Platform> {
        let from_os_release = self.os_release_paths.iter().find_map(|path| {
            match std::fs::read_to_string(path) {
                Ok(content) => parse_os_release(&content),
                Err(e) => {
                    tracing::debug!("Cannot read {}: {}", path.display(), e);
                    None
                }
            }
        });

        let platform = from_os_release.or_else(|| {
            tracing::debug!("No usable os-release, trying lsb_release");
            command_output("lsb_release", &["-idr"]).and_then(|out| parse_lsb_release(&out))
        })?;

        Some(platform.with_arch(std::env::consts::ARCH))
    }

    /// Resolve as a Mac.
    pub fn resolve_darwin(&self) -> Option<Platform> {
        let manager = self.darwin_manager.unwrap_or_else(detect_darwin_manager);
        let tag = manager.darwin_tag()?;

        let release = command_output("sw_vers", &["-productVersion"])
            .map(|out| out.trim().to_string())
            .filter(|v| !v.is_empty());

        let description = match &release {
            Some(v) => format!("Mac OS X {}", v),
            None => "Mac OS X (Darwin)".to_string(),
        };

        let mut platform = Platform::new(tag, description).with_arch(std::env::consts::ARCH);
        platform.release = release;
        Some(platform)
    }
}

impl Default for SystemResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformResolver for SystemResolver {
    fn resolve(&self) -> Option<Platform> {
        let platform = match std::env::consts::OS {
            "linux" => self.resolve_linux(),
            "macos" => self.resolve_darwin(),
            other => {
                tracing::debug!("No platform detection for OS '{}'", other);
                None
            }
        };

        match &platform {
            Some(p) => tracing::debug!("Resolved platform {} ({})", p.distributor, p.description),
            None => tracing::debug!("Platform not recognised"),
        }
        platform
    }
}

/// Map a distribution identifier to the tag recipes are registered under.
///
/// Unknown identifiers keep their spelling with the first letter upper-cased.
pub fn normalize_distributor(id: &str) -> String {
    let id = id.trim();
    let lowered = id.to_lowercase();
    if let Some((_, tag)) = DISTRIBUTOR_TAGS.iter().find(|(known, _)| *known == lowered) {
        return (*tag).to_string();
    }

    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Parse the contents of an `os-release` file.
///
/// Needs at least `ID`. The description is `PRETTY_NAME`, else `NAME`,
/// else the tag.
pub fn parse_os_release(content: &str) -> Option<Platform> {
    let mut id = None;
    let mut pretty_name = None;
    let mut name = None;
    let mut version_id = None;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = unquote(value.trim());
        match key.trim() {
            "ID" => id = Some(value),
            "PRETTY_NAME" => pretty_name = Some(value),
            "NAME" => name = Some(value),
            "VERSION_ID" => version_id = Some(value),
            _ => {}
        }
    }

    let id = id.filter(|s| !s.is_empty())?;
    let distributor = normalize_distributor(&id);
    let description = pretty_name
        .or(name)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| distributor.clone());

    let mut platform = Platform::new(distributor, description);
    platform.release = version_id.filter(|s| !s.is_empty());
    Some(platform)
}

/// Parse `lsb_release -idr` output.
pub fn parse_lsb_release(output: &str) -> Option<Platform> {
    let field = |label: &str| {
        output.lines().find_map(|line| {
            line.strip_prefix(label)
                .map(|rest| rest.trim().to_string())
                .filter(|v| !v.is_empty())
        })
    };

    let distributor = normalize_distributor(&field("Distributor ID:")?);
    let description = field("Description:").unwrap_or_else(|| distributor.clone());

    let mut platform = Platform::new(distributor, description);
    platform.release = field("Release:").filter(|r| r != "n/a");
    Some(platform)
}

fn unquote(value: &str) -> String {
    let stripped = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
        .unwrap_or(value);
    stripped.to_string()
}

fn detect_darwin_manager() -> PackageManager {
    DARWIN_MANAGERS
        .iter()
        .find(|(_, probe)| command_succeeds(probe))
        .map(|(manager, _)| *manager)
        .unwrap_or(PackageManager::Pip)
}

/// Check if a command succeeds.
fn command_succeeds(command: &str) -> bool {
    let parts: Vec<&str> = command.split_whitespace().collect();
    if parts.is_empty() {
        return false;
    }

    Command::new(parts[0])
        .args(&parts[1..])
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn command_output(program: &str, args: &[&str]) -> Option<String> {
    match Command::new(program).args(args).output() {
        Ok(output) if output.status.success() => {
            Some(String::from_utf8_lossy(&output.stdout).into_owned())
        }
        Ok(_) => None,
        Err(e) => {
            tracing::debug!("Cannot run {}: {}", program, e);
            None
        }
    }
}
