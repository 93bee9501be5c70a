//! Cleanup configuration loaded from a JSON file.
//!
//! The file is a top-level array of rules:
//!
//! ```json
//! [{ "root": "/tmp/a", "match": ["*.tmp", "cache/**"] }]
//! ```

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::error::CleanerError;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "CLEANER_CONFIG";

/// One cleanup target: a root directory and the globs to delete under it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CleanupRule {
    pub root: PathBuf,
    #[serde(rename = "match")]
    pub patterns: Vec<String>,
}

impl CleanupRule {
    pub fn new(root: impl Into<PathBuf>, patterns: &[&str]) -> Self {
        Self {
            root: root.into(),
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Ordered list of rules, read once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct CleanupConfig {
    rules: Vec<CleanupRule>,
}

impl CleanupConfig {
    pub fn new(rules: Vec<CleanupRule>) -> Self {
        Self { rules }
    }

    /// Read and parse the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self, CleanerError> {
        let data = fs::read(path).map_err(|source| CleanerError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_slice(&data).map_err(|source| CleanerError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(rules = config.len(), "loaded cleanup config");
        Ok(config)
    }

    /// Resolve the path from [`CONFIG_ENV`] and load it.
    pub fn from_env() -> Result<Self, CleanerError> {
        let path = config_path_from_env(CONFIG_ENV)?;
        Self::load(&path)
    }

    pub fn from_slice(data: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(data)
    }

    pub fn rules(&self) -> &[CleanupRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn into_rules(self) -> Vec<CleanupRule> {
        self.rules
    }
}

/// Read a config path from the environment variable `var`.
///
/// An empty value is treated the same as an unset one.
pub fn config_path_from_env(var: &'static str) -> Result<PathBuf, CleanerError> {
    let value = env::var_os(var).unwrap_or_default();
    info!("config file path: {}", Path::new(&value).display());

    if value.is_empty() {
        return Err(CleanerError::MissingConfigEnv { var });
    }
    Ok(PathBuf::from(value))
}
