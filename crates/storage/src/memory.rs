//! In-memory backend for tests and throwaway collections
//!
//! Clone-friendly via Arc: clones share the same collections.

use crate::adapter::Storage;
use crate::outcome::{LoadOutcome, RecoveryReason};
use parking_lot::RwLock;
use recordstore_core::{Record, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// HashMap-backed storage keyed by locator
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    collections: Arc<RwLock<HashMap<String, Vec<Record>>>>,
}

impl MemoryStorage {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a collection has been persisted under `locator`
    pub fn contains(&self, locator: &str) -> bool {
        self.collections.read().contains_key(locator)
    }

    /// Number of collections held
    pub fn len(&self) -> usize {
        self.collections.read().len()
    }

    /// Whether no collection is held
    pub fn is_empty(&self) -> bool {
        self.collections.read().is_empty()
    }
}

impl Storage for MemoryStorage {
    fn load(&self, locator: &str) -> LoadOutcome {
        match self.collections.read().get(locator) {
            Some(records) => LoadOutcome::Loaded(records.clone()),
            None => LoadOutcome::recovered(RecoveryReason::Missing),
        }
    }

    fn persist(&self, locator: &str, records: &[Record]) -> Result<()> {
        self.collections
            .write()
            .insert(locator.to_string(), records.to_vec());
        debug!(target: "recordstore::storage", locator, records = records.len(), "Collection persisted in memory");
        Ok(())
    }

    fn erase(&self, locator: &str) -> Result<()> {
        self.collections.write().remove(locator);
        Ok(())
    }
}
