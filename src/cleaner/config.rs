// Configuration module
// Default target-name set plus optional TOML overrides

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::patterns::TargetMatcher;

/// Folder names treated as cleanup targets when no config overrides them
pub const DEFAULT_TARGETS: [&str; 5] = ["node_modules", "venv", ".venv", "env", ".env"];

/// Runtime configuration for a sweep run
#[derive(Debug, Clone)]
pub struct Config {
    pub targets: HashSet<String>,
}

/// On-disk config schema
///
/// `targets` replaces the default set entirely; `extra_targets` extends
/// whatever set is in effect. Both are optional.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    targets: Option<Vec<String>>,
    #[serde(default)]
    extra_targets: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            targets: DEFAULT_TARGETS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Config {
    /// Load configuration from an explicit path or the user config directory
    ///
    /// With no explicit path, `<config_dir>/dirsweep/config.toml` is used if
    /// it exists and the defaults are returned otherwise. An explicit path
    /// that cannot be read or parsed is a fatal error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) if p.exists() => p,
                _ => return Ok(Self::default()),
            },
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let file: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(Self::from_file(file))
    }

    /// Default config location under the platform config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("dirsweep").join("config.toml"))
    }

    /// Parse a TOML string into a Config, applying defaults and extensions
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content).context("Failed to parse config")?;
        Ok(Self::from_file(file))
    }

    fn from_file(file: ConfigFile) -> Self {
        let mut targets: HashSet<String> = match file.targets {
            Some(list) => list.into_iter().collect(),
            None => Self::default().targets,
        };
        targets.extend(file.extra_targets);
        Self { targets }
    }

    /// Build the matcher for this configuration's target set
    pub fn matcher(&self) -> TargetMatcher {
        TargetMatcher::new(self.targets.iter().cloned())
    }
}
