//! Infrastructure layer - Persistence and configuration

pub mod config;
pub mod entry_store;
pub mod kv_store;
pub mod repository;

pub use config::{Config, DEFAULT_STORAGE_KEY};
pub use entry_store::EntryStore;
pub use kv_store::{is_valid_key, FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use repository::{FileSystemRepository, LogRepository};

/// Directory that marks a log root and holds its config and data
pub const STACKS_DIR: &str = ".storystacks";
