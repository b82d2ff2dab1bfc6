//! Add entry use case

use crate::domain::{Entry, EntryDraft, LogAction};
use crate::error::Result;
use crate::infrastructure::{EntryStore, KeyValueStore};
use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

/// Current time as a fixed-width UTC timestamp (`2024-01-01T00:00:00.000Z`)
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Service for logging a new entry
pub struct AddEntryService<S: KeyValueStore> {
    store: EntryStore<S>,
}

impl<S: KeyValueStore> AddEntryService<S> {
    /// Create a new add entry service
    pub fn new(store: EntryStore<S>) -> Self {
        AddEntryService { store }
    }

    pub fn store(&self) -> &EntryStore<S> {
        &self.store
    }

    /// Validate the draft, prepend it and write the log back.
    pub fn execute(&mut self, draft: EntryDraft) -> Result<Entry> {
        self.execute_with(draft, Uuid::new_v4().to_string(), timestamp_now())
    }

    /// Same as `execute` with a caller-supplied id and creation time.
    pub fn execute_with(
        &mut self,
        draft: EntryDraft,
        id: String,
        created_at: String,
    ) -> Result<Entry> {
        // Rejected drafts never touch storage
        let entry = draft.into_entry(id, created_at)?;

        let mut state = self.store.load()?;
        state.apply(LogAction::Add(entry.clone()));
        self.store.save(&state)?;

        log::info!("Added entry {} ({})", entry.id, entry.title);
        Ok(entry)
    }
}
