//! Delete entry use case

use crate::domain::{Entry, LogAction};
use crate::error::Result;
use crate::infrastructure::{EntryStore, KeyValueStore};

/// Service for removing entries. Confirmation is the caller's job.
pub struct DeleteEntryService<S: KeyValueStore> {
    store: EntryStore<S>,
}

impl<S: KeyValueStore> DeleteEntryService<S> {
    pub fn new(store: EntryStore<S>) -> Self {
        DeleteEntryService { store }
    }

    pub fn store(&self) -> &EntryStore<S> {
        &self.store
    }

    /// Look up an entry so the caller can ask for confirmation
    pub fn find(&self, id: &str) -> Result<Option<Entry>> {
        Ok(self.store.load()?.find(id).cloned())
    }

    /// Remove the entry and write the log back. Unknown ids are a no-op.
    pub fn execute(&mut self, id: &str) -> Result<Option<Entry>> {
        let mut state = self.store.load()?;
        let Some(removed) = state.find(id).cloned() else {
            return Ok(None);
        };

        state.apply(LogAction::Delete(id.to_string()));
        self.store.save(&state)?;

        log::info!("Deleted entry {} ({})", removed.id, removed.title);
        Ok(Some(removed))
    }
}
