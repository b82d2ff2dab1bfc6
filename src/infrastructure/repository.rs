//! File system repository

use crate::error::{Result, StacksError};
use crate::infrastructure::{Config, EntryStore, FileKeyValueStore, STACKS_DIR};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that pins the log root
pub const ROOT_ENV: &str = "STORYSTACKS_ROOT";

/// Abstract repository for log directory operations
pub trait LogRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .storystacks/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .storystacks/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .storystacks directory exists
    fn is_initialized(&self) -> bool;

    /// Create .storystacks directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of LogRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Locate the log root: `STORYSTACKS_ROOT` when set (it must hold a log),
    /// otherwise the nearest ancestor of the current directory that does.
    pub fn discover() -> Result<Self> {
        match std::env::var_os(ROOT_ENV).map(PathBuf::from) {
            Some(pinned) if Self::has_stacks_dir(&pinned) => Ok(FileSystemRepository::new(pinned)),
            Some(pinned) => Err(StacksError::Config(format!(
                "{} points at {}, which holds no log. Run 'storystacks init {}' or unset it.",
                ROOT_ENV,
                pinned.display(),
                pinned.display()
            ))),
            None => Self::discover_from(&std::env::current_dir()?),
        }
    }

    /// Nearest directory at or above `start` that holds a log
    pub fn discover_from(start: &Path) -> Result<Self> {
        let root = start
            .ancestors()
            .find(|dir| Self::has_stacks_dir(dir))
            .ok_or_else(|| StacksError::NotStacksDirectory(start.to_path_buf()))?;

        log::debug!("Using log root {}", root.display());
        Ok(FileSystemRepository::new(root.to_path_buf()))
    }

    fn has_stacks_dir(path: &Path) -> bool {
        path.join(STACKS_DIR).is_dir()
    }

    /// Entry store backed by files under .storystacks, keyed per config.
    pub fn entry_store(&self) -> Result<EntryStore<FileKeyValueStore>> {
        let config = self.load_config()?;
        let backend = FileKeyValueStore::new(self.root.join(STACKS_DIR));
        Ok(EntryStore::new(backend, config.storage_key))
    }
}

impl LogRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_stacks_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let stacks_dir = self.root.join(STACKS_DIR);

        if stacks_dir.exists() {
            return Err(StacksError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&stacks_dir)?;
        Ok(())
    }
}
