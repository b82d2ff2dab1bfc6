//! Domain layer - Entries, filters and derived views

pub mod category;
pub mod entry;
pub mod entry_log;
pub mod view;

pub use category::Category;
pub use entry::{Entry, EntryDraft, UNKNOWN_YEAR};
pub use entry_log::{EntryLog, LogAction};
pub use view::{CategoryFilter, LogStats, ViewFilters, YearFilter};
