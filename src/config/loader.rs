//! Configuration file discovery and loading.

use crate::config::schema::DepguideConfig;
use crate::error::{DepguideError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "DEPGUIDE_CONFIG";

/// File names searched for in the working directory, in order.
pub const CONFIG_FILE_NAMES: &[&str] = &["depguide.yml", ".depguide.yml"];

/// Find the config file to use.
///
/// Priority:
/// 1. `explicit` (the `--config` flag)
/// 2. `DEPGUIDE_CONFIG`
/// 3. `depguide.yml` or `.depguide.yml` in `dir`
///
/// Explicit paths are returned whether or not they exist, so that a typo
/// surfaces as `ConfigNotFound` instead of silently falling back.
pub fn discover_config(explicit: Option<&Path>, dir: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = std::env::var(CONFIG_ENV) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Load a single config file and parse it into DepguideConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<DepguideConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DepguideError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DepguideError::Io(e)
        }
    })?;

    tracing::debug!("Loaded config from {}", path.display());
    parse_config(&content, path)
}

/// Parse YAML content into DepguideConfig.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<DepguideConfig> {
    serde_yaml::from_str(content).map_err(|e| DepguideError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Discover and load the configuration.
///
/// # Errors
///
/// Returns `ConfigNotFound` if no config file can be found.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<DepguideConfig> {
    let path = discover_config(explicit, dir).ok_or_else(|| DepguideError::ConfigNotFound {
        path: dir.join(CONFIG_FILE_NAMES[0]),
    })?;
    load_config_file(&path)
}
