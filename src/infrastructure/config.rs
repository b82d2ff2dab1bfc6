//! Configuration management

use crate::domain::Category;
use crate::error::{Result, StacksError};
use crate::infrastructure::STACKS_DIR;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Key the entry array is stored under unless configured otherwise
pub const DEFAULT_STORAGE_KEY: &str = "storyStacksEntries";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default)]
    pub default_category: Category,
    pub created: DateTime<Utc>,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage_key: default_storage_key(),
            default_category: Category::default(),
            created: Utc::now(),
        }
    }
}

impl Config {
    /// Load config from .storystacks/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(STACKS_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StacksError::NotStacksDirectory(path.to_path_buf())
            } else {
                StacksError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| StacksError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .storystacks/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let stacks_dir = path.join(STACKS_DIR);
        let config_path = stacks_dir.join("config.toml");

        if !stacks_dir.exists() {
            fs::create_dir(&stacks_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }
}
