//! Pin toggle use case

use crate::domain::{Entry, LogAction};
use crate::error::Result;
use crate::infrastructure::{EntryStore, KeyValueStore};

/// Service for pinning and unpinning entries
pub struct PinEntryService<S: KeyValueStore> {
    store: EntryStore<S>,
}

impl<S: KeyValueStore> PinEntryService<S> {
    pub fn new(store: EntryStore<S>) -> Self {
        PinEntryService { store }
    }

    pub fn store(&self) -> &EntryStore<S> {
        &self.store
    }

    /// Flip the pinned flag and write the log back.
    ///
    /// Returns the updated entry, or `None` when no entry has this id (in
    /// which case nothing is written).
    pub fn execute(&mut self, id: &str) -> Result<Option<Entry>> {
        let mut state = self.store.load()?;
        if !state.apply(LogAction::TogglePinned(id.to_string())) {
            log::debug!("Pin toggle for unknown id {}", id);
            return Ok(None);
        }

        self.store.save(&state)?;
        Ok(state.find(id).cloned())
    }
}
