//! Application layer - Use cases and orchestration

pub mod add_entry;
pub mod delete_entry;
pub mod init;
pub mod manage_config;
pub mod pin_entry;
pub mod view_log;

pub use add_entry::AddEntryService;
pub use delete_entry::DeleteEntryService;
pub use manage_config::ConfigService;
pub use pin_entry::PinEntryService;
pub use view_log::{LogView, ViewLogService};
