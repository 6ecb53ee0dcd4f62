use paperflow_editor::DEFAULT_HISTORY_LIMIT;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "paperflow.config.json";

/// Paperflow configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Undo levels kept per session
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Output file name used when none is given on the command line
    #[serde(default = "default_output_name")]
    pub output_name: String,

    /// Extract pages on the blocking pool instead of one by one
    #[serde(default = "default_concurrent_export")]
    pub concurrent_export: bool,
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

fn default_output_name() -> String {
    "paperflow.pdf".to_string()
}

fn default_concurrent_export() -> bool {
    true
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = Self::path(cwd);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "loaded config");
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    pub fn path(cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME)
    }

    /// Output path for an export, relative to `cwd` unless absolute
    pub fn output_path(&self, cwd: &str, explicit: Option<&str>) -> PathBuf {
        PathBuf::from(cwd).join(explicit.unwrap_or(&self.output_name))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            output_name: default_output_name(),
            concurrent_export: default_concurrent_export(),
        }
    }
}
