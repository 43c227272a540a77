// Store configuration

use crate::task::TaskPriority;
use eyre::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Defaults applied at task construction plus analyzer tuning.
///
/// Loaded from an optional YAML file; absent fields keep their defaults so a
/// partial config is fine.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Category assigned when `add` is called without one.
    pub default_category: String,
    /// Priority assigned when `add` is called without one.
    pub default_priority: TaskPriority,
    /// Pending-task count above which the backlog warning trips.
    pub overload_threshold: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            default_category: "General".to_string(),
            default_priority: TaskPriority::Medium,
            overload_threshold: 5,
        }
    }
}

impl StoreConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file {:?}", path.as_ref()))?;
        let config: StoreConfig =
            serde_yaml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }
}
