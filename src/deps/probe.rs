//! Command-based version probing.
//!
//! Runs a command and scans its output for something that looks like a
//! version number. Used by dependencies declared in configuration, which
//! cannot carry a version closure.

use std::process::Command;

/// Looks up the installed version of a dependency by running a command.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandVersionProbe {
    command: String,
    args: Vec<String>,
}

impl CommandVersionProbe {
    /// Create from a full command string, e.g. `"bzip2 --version"`.
    pub fn from_string(cmd: &str) -> Self {
        let parts: Vec<&str> = cmd.split_whitespace().collect();
        let (command, args) = if parts.is_empty() {
            (cmd.to_string(), Vec::new())
        } else {
            (
                parts[0].to_string(),
                parts[1..].iter().map(|s| s.to_string()).collect(),
            )
        };

        Self { command, args }
    }

    /// Run the command and extract a version.
    ///
    /// Returns `None` when the command cannot be run, exits non-zero, or
    /// prints nothing version-like. Both stdout and stderr are scanned since
    /// plenty of tools print their banner on stderr.
    pub fn version(&self) -> Option<String> {
        let output = match Command::new(&self.command).args(&self.args).output() {
            Ok(output) if output.status.success() => output,
            Ok(output) => {
                tracing::debug!(
                    "Version probe '{}' exited with {:?}",
                    self.command,
                    output.status.code()
                );
                return None;
            }
            Err(e) => {
                tracing::debug!("Version probe '{}' could not run: {}", self.command, e);
                return None;
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        extract_version(&stdout).or_else(|| extract_version(&stderr))
    }
}

/// Extract version from command output.
pub fn extract_version(output: &str) -> Option<String> {
    let patterns = [r"(\d+\.\d+\.\d+)", r"version\s+(\d+\.\d+)", r"v?(\d+\.\d+)"];

    for pattern in &patterns {
        if let Ok(re) = regex::Regex::new(pattern) {
            if let Some(caps) = re.captures(output) {
                if let Some(m) = caps.get(1) {
                    return Some(m.as_str().to_string());
                }
            }
        }
    }

    None
}
