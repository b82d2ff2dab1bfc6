//! Initialize log use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, LogRepository};
use std::fs;
use std::path::Path;

/// Initialize a new log at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;
    repo.save_config(&Config::default())?;

    log::info!("Initialized log at {}", path.display());
    Ok(())
}
