//! Request history: newest first, capped, persisted wholesale on every
//! change. No deduplication, no per-endpoint grouping.

use log::debug;

use crate::domain::history::HistoryEntry;
use crate::errors::Result;
use crate::store::{keys, FileStore};

pub const HISTORY_CAP: usize = 10;

#[derive(Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn load(store: &FileStore) -> Self {
        History {
            entries: store.get(keys::REQUEST_HISTORY).unwrap_or_default(),
        }
    }

    pub fn record(&mut self, entry: HistoryEntry, store: &FileStore) -> Result<()> {
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_CAP);
        store.set(keys::REQUEST_HISTORY, &self.entries)?;
        debug!("history now holds {} entries", self.entries.len());
        Ok(())
    }

    pub fn clear(&mut self, store: &FileStore) -> Result<()> {
        self.entries.clear();
        store.remove(keys::REQUEST_HISTORY)
    }

    /// Entries newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
