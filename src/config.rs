//! Migration configuration loaded from YAML.
//!
//! ```yaml
//! packageResolves:
//!   jquery-legacy: jquery
//! overwriteDuplicates: false
//! ```

use crate::error::{MigrateError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Ordered rename table: legacy dependency name → canonical name.
pub type RenameTable = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Legacy names to rewrite to their canonical package names.
    pub package_resolves: RenameTable,

    /// Let the bower entry win when both manifests declare a dependency.
    pub overwrite_duplicates: bool,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| MigrateError::ConfigLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config = Self::from_yaml(&content).map_err(|e| MigrateError::ConfigLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        log::debug!(
            "Loaded config {} ({} package resolves)",
            path.display(),
            config.package_resolves.len()
        );
        Ok(config)
    }

    /// Parses a config document. An empty document yields the defaults.
    pub fn from_yaml(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Loads `explicit` if given, else `config.yaml` in the working directory
    /// if it exists, else the defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::load(&fallback)
                } else {
                    log::debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Iterates `(from, to)` pairs. Entries whose target is not a string are ignored.
    pub fn renames(&self) -> impl Iterator<Item = (&str, &str)> {
        self.package_resolves
            .iter()
            .filter_map(|(from, to)| to.as_str().map(|to| (from.as_str(), to)))
    }
}
