//! Serialized entry array on top of a key-value store

use crate::domain::{Entry, EntryLog};
use crate::error::{Result, StacksError};
use crate::infrastructure::KeyValueStore;
use serde_json::Value;

/// Loads and writes back the whole entry collection under one key.
#[derive(Debug, Clone)]
pub struct EntryStore<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> EntryStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        EntryStore {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.store
    }

    /// Read the collection.
    ///
    /// A missing value, undecodable bytes, unparseable JSON or a non-array
    /// value all yield an empty log. Array items that are not valid entries
    /// are left out of the log but kept in storage (see `save`).
    pub fn load(&self) -> Result<EntryLog> {
        let entries = self
            .stored_items()?
            .into_iter()
            .enumerate()
            .filter_map(|(idx, item)| match serde_json::from_value::<Entry>(item) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    log::warn!("Skipping unreadable entry #{}: {}", idx, e);
                    None
                }
            })
            .collect();

        Ok(EntryLog::new(entries))
    }

    /// Serialize the full collection and write it back under the same key.
    ///
    /// Stored items that never loaded as entries are written back unchanged
    /// after the log's entries.
    pub fn save(&mut self, state: &EntryLog) -> Result<()> {
        let unreadable: Vec<Value> = self
            .stored_items()?
            .into_iter()
            .filter(|item| serde_json::from_value::<Entry>(item.clone()).is_err())
            .collect();

        let mut items = Vec::with_capacity(state.len() + unreadable.len());
        for entry in state.entries() {
            items.push(serde_json::to_value(entry)?);
        }
        items.extend(unreadable);

        let serialized = serde_json::to_string_pretty(&items)?;
        self.store.set(&self.key, &serialized)?;
        log::debug!("Wrote {} items to '{}'", items.len(), self.key);
        Ok(())
    }

    /// Raw array items under the key; empty when the value is absent or
    /// malformed.
    fn stored_items(&self) -> Result<Vec<Value>> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Ok(Vec::new()),
            Err(StacksError::CorruptValue(key)) => {
                log::warn!("Stored value under '{}' is not text; starting empty", key);
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(items)) => Ok(items),
            Ok(_) => {
                log::warn!("Stored value under '{}' is not an array; starting empty", self.key);
                Ok(Vec::new())
            }
            Err(e) => {
                log::warn!("Could not parse entries under '{}': {}; starting empty", self.key, e);
                Ok(Vec::new())
            }
        }
    }
}
