use essay_assist::AssistSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "essay.config.json";

/// Essay composer configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding one JSON file per essay
    #[serde(default = "default_store_dir")]
    pub store_dir: String,

    /// Owner recorded on new essays and used for listing
    #[serde(default = "default_owner_id")]
    pub owner_id: String,

    /// Content assist provider
    #[serde(default)]
    pub assist: AssistSettings,
}

fn default_store_dir() -> String {
    ".essays".to_string()
}

fn default_owner_id() -> String {
    "local".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Get absolute path to the store directory
    pub fn get_store_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.store_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_dir: default_store_dir(),
            owner_id: default_owner_id(),
            assist: AssistSettings::default(),
        }
    }
}
