//! Record operations over a whole collection
//!
//! Every operation follows the same cycle: load the full collection, scan
//! it with the caller's predicate, and for mutations write the full result
//! back. Nothing is locked between the load and the write, so two cycles on
//! the same locator race and the later write wins for the whole collection.
//!
//! A mutation that matches nothing never writes. In particular it never
//! creates a missing resource.

use crate::config::StoreConfig;
use crate::outcome::{DeleteAllOutcome, DeleteOutcome, PatchOutcome, PutOutcome, UpdateAllOutcome};
use recordstore_core::{assign_ids, Record, Result, ID_FIELD};
use recordstore_storage::{JsonFileStorage, LoadOutcome, Storage};
use std::path::Path;
use tracing::debug;

/// Predicate-driven CRUD over collections held by a [`Storage`] backend
///
/// # Example
///
/// ```
/// use recordstore_core::Record;
/// use recordstore_engine::RecordEngine;
/// use recordstore_storage::MemoryStorage;
/// use serde_json::json;
///
/// let engine = RecordEngine::with_storage(MemoryStorage::new());
/// let items: Vec<Record> = vec![
///     Record::try_from(json!({"name": "A", "price": 3})).unwrap(),
///     Record::try_from(json!({"name": "B", "price": 8})).unwrap(),
/// ];
/// engine.seed("groceries", &items).unwrap();
///
/// let expensive = engine
///     .find_first("groceries", |r| r.get("price").and_then(|p| p.as_f64()) > Some(5.0))
///     .unwrap();
/// assert_eq!(expensive.get("name"), Some(&json!("B")));
///
/// let status = engine
///     .delete_all("groceries", |r| r.get("price").and_then(|p| p.as_f64()) > Some(5.0))
///     .unwrap();
/// assert_eq!(status.to_string(), "Deleted 1 items");
/// ```
#[derive(Debug, Clone)]
pub struct RecordEngine<S = JsonFileStorage> {
    storage: S,
}

impl Default for RecordEngine<JsonFileStorage> {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordEngine<JsonFileStorage> {
    /// Engine over JSON files with default settings
    pub fn new() -> Self {
        Self::with_storage(JsonFileStorage::new())
    }

    /// Engine over JSON files configured by `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the config names an unknown durability mode.
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        Ok(Self::with_storage(config.file_storage()?))
    }

    /// Engine configured by the TOML file at `path`
    ///
    /// Writes the default config first if the file does not exist.
    pub fn from_config_file(path: &Path) -> Result<Self> {
        StoreConfig::write_default_if_missing(path)?;
        Self::from_config(&StoreConfig::from_file(path)?)
    }
}

impl<S: Storage> RecordEngine<S> {
    /// Engine over an explicit backend
    pub fn with_storage(storage: S) -> Self {
        Self { storage }
    }

    /// The backend
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load a collection, keeping the distinction between a real and a
    /// recovered-empty collection
    pub fn load(&self, locator: &str) -> LoadOutcome {
        self.storage.load(locator)
    }

    fn records(&self, locator: &str) -> Vec<Record> {
        self.storage.load(locator).into_records()
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// First record, in stored order, satisfying `predicate`
    pub fn find_first<P>(&self, locator: &str, predicate: P) -> Option<Record>
    where
        P: Fn(&Record) -> bool,
    {
        self.records(locator).into_iter().find(|r| predicate(r))
    }

    /// Last record, in stored order, satisfying `predicate`
    pub fn find_last<P>(&self, locator: &str, predicate: P) -> Option<Record>
    where
        P: Fn(&Record) -> bool,
    {
        self.records(locator).into_iter().rev().find(|r| predicate(r))
    }

    /// Position of the first record satisfying `predicate`
    pub fn find_index<P>(&self, locator: &str, predicate: P) -> Option<usize>
    where
        P: Fn(&Record) -> bool,
    {
        self.records(locator).iter().position(|r| predicate(r))
    }

    /// Position of the last record satisfying `predicate`
    pub fn find_last_index<P>(&self, locator: &str, predicate: P) -> Option<usize>
    where
        P: Fn(&Record) -> bool,
    {
        self.records(locator).iter().rposition(|r| predicate(r))
    }

    /// Every record satisfying `predicate`, in stored order
    pub fn find_all<P>(&self, locator: &str, predicate: P) -> Vec<Record>
    where
        P: Fn(&Record) -> bool,
    {
        self.records(locator)
            .into_iter()
            .filter(|r| predicate(r))
            .collect()
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Remove the first record satisfying `predicate`
    ///
    /// Removal is by position, so of two identical records only the first
    /// goes.
    pub fn delete_one<P>(&self, locator: &str, predicate: P) -> Result<DeleteOutcome>
    where
        P: Fn(&Record) -> bool,
    {
        let mut records = self.records(locator);
        let position = match records.iter().position(|r| predicate(r)) {
            Some(position) => position,
            None => return Ok(DeleteOutcome::NotFound),
        };

        records.remove(position);
        self.storage.persist(locator, &records)?;

        debug!(target: "recordstore::engine", locator, position, "Deleted record");
        Ok(DeleteOutcome::Deleted)
    }

    /// Remove every record satisfying `predicate`
    ///
    /// Kept records stay in their relative order. When nothing matches the
    /// collection is not rewritten.
    pub fn delete_all<P>(&self, locator: &str, predicate: P) -> Result<DeleteAllOutcome>
    where
        P: Fn(&Record) -> bool,
    {
        let records = self.records(locator);
        let total = records.len();
        let kept: Vec<Record> = records.into_iter().filter(|r| !predicate(r)).collect();
        let removed = total - kept.len();

        if removed > 0 {
            self.storage.persist(locator, &kept)?;
            debug!(target: "recordstore::engine", locator, removed, "Deleted records");
        }
        Ok(DeleteAllOutcome { removed })
    }

    /// Replace the first record satisfying `predicate` with `payload`
    ///
    /// The stored record keeps the original `id`, whatever `payload` says;
    /// every other old field is dropped.
    pub fn put<P>(&self, locator: &str, predicate: P, payload: &Record) -> Result<PutOutcome>
    where
        P: Fn(&Record) -> bool,
    {
        let mut records = self.records(locator);
        let position = match records.iter().position(|r| predicate(r)) {
            Some(position) => position,
            None => return Ok(PutOutcome::NotFound),
        };

        let replacement = records[position].replaced_by(payload);
        records[position] = replacement.clone();
        self.storage.persist(locator, &records)?;

        debug!(target: "recordstore::engine", locator, position, "Replaced record");
        Ok(PutOutcome::Updated(replacement))
    }

    /// Shallow-merge `updates` into the first record satisfying `predicate`
    ///
    /// Unlike [`put`](Self::put), an `id` inside `updates` does overwrite
    /// the stored one.
    pub fn patch<P>(&self, locator: &str, predicate: P, updates: &Record) -> Result<PatchOutcome>
    where
        P: Fn(&Record) -> bool,
    {
        let mut records = self.records(locator);
        let position = match records.iter().position(|r| predicate(r)) {
            Some(position) => position,
            None => return Ok(PatchOutcome::NotFound),
        };

        let merged = records[position].merged(updates);
        records[position] = merged.clone();
        self.storage.persist(locator, &records)?;

        debug!(target: "recordstore::engine", locator, position, "Patched record");
        Ok(PatchOutcome::Patched(merged))
    }

    /// Apply `transform` to every record satisfying `predicate`
    ///
    /// The `id` field is put back after each transform, so bulk updates
    /// cannot change identity. When nothing matches the collection is not
    /// rewritten.
    pub fn update_all<P, F>(
        &self,
        locator: &str,
        predicate: P,
        mut transform: F,
    ) -> Result<UpdateAllOutcome>
    where
        P: Fn(&Record) -> bool,
        F: FnMut(&mut Record),
    {
        let mut records = self.records(locator);
        let mut updated = 0;

        for record in records.iter_mut().filter(|r| predicate(r)) {
            let id = record.get(ID_FIELD).cloned();
            transform(record);
            match id {
                Some(id) => {
                    record.insert(ID_FIELD.to_string(), id);
                }
                None => {
                    record.shift_remove(ID_FIELD);
                }
            }
            updated += 1;
        }

        if updated > 0 {
            self.storage.persist(locator, &records)?;
            debug!(target: "recordstore::engine", locator, updated, "Updated records");
        }
        Ok(UpdateAllOutcome { updated })
    }

    /// Admit `records` as the whole collection
    ///
    /// Stamps ids on records lacking one, replaces whatever was stored and
    /// returns the stamped records.
    pub fn seed(&self, locator: &str, records: &[Record]) -> Result<Vec<Record>> {
        let stamped = assign_ids(records);
        self.storage.persist(locator, &stamped)?;
        debug!(target: "recordstore::engine", locator, records = stamped.len(), "Seeded collection");
        Ok(stamped)
    }

    /// Remove the collection; absent is not an error
    pub fn erase(&self, locator: &str) -> Result<()> {
        self.storage.erase(locator)
    }
}
