//! Config management use case

use crate::domain::Category;
use crate::error::{Result, StacksError};
use crate::infrastructure::{is_valid_key, Config, FileSystemRepository, LogRepository};
use std::str::FromStr;

/// Service for managing log configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "storage_key" => Ok(config.storage_key),
            "default_category" => Ok(config.default_category.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(StacksError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: storage_key, default_category, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "storage_key" => {
                if !is_valid_key(value) {
                    return Err(StacksError::Config(format!(
                        "Invalid storage_key: '{}'. Use letters, digits, '-' or '_'",
                        value
                    )));
                }
                config.storage_key = value.to_string();
            }
            "default_category" => {
                config.default_category =
                    Category::from_str(value).map_err(StacksError::InvalidCategory)?;
            }
            "created" => {
                return Err(StacksError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(StacksError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: storage_key, default_category",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
