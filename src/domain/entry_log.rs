//! Entry log state and the actions that change it

use crate::domain::view::{self, LogStats, ViewFilters};
use crate::domain::Entry;

/// A single state change requested by the user
#[derive(Debug, Clone)]
pub enum LogAction {
    /// Prepend a freshly created entry
    Add(Entry),
    /// Flip the pinned flag of the entry with this id
    TogglePinned(String),
    /// Remove the entry with this id (confirmation happens before dispatch)
    Delete(String),
}

/// The in-memory collection, newest additions first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryLog {
    entries: Vec<Entry>,
}

impl EntryLog {
    pub fn new(entries: Vec<Entry>) -> Self {
        EntryLog { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Apply an action. Returns true when the collection changed and must be
    /// written back.
    pub fn apply(&mut self, action: LogAction) -> bool {
        match action {
            LogAction::Add(entry) => {
                self.entries.insert(0, entry);
                true
            }
            LogAction::TogglePinned(id) => toggle_pinned(&mut self.entries, &id),
            LogAction::Delete(id) => delete_entry(&mut self.entries, &id),
        }
    }

    pub fn view(&self, filters: &ViewFilters) -> Vec<&Entry> {
        view::filter_and_sort(&self.entries, filters)
    }

    pub fn years(&self) -> Vec<String> {
        view::available_years(&self.entries)
    }

    pub fn stats(&self) -> LogStats {
        view::compute_stats(&self.entries)
    }
}

/// Flip `pinned` on the matching entry. Unknown ids are a no-op.
pub fn toggle_pinned(entries: &mut [Entry], id: &str) -> bool {
    match entries.iter_mut().find(|e| e.id == id) {
        Some(entry) => {
            entry.pinned = !entry.pinned;
            true
        }
        None => false,
    }
}

/// Remove every entry carrying this id. Unknown ids are a no-op.
///
/// Returns true when anything was removed.
pub fn delete_entry(entries: &mut Vec<Entry>, id: &str) -> bool {
    let before = entries.len();
    entries.retain(|e| e.id != id);
    entries.len() != before
}
