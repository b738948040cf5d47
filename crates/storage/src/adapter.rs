//! Storage trait
//!
//! The engine only ever loads a whole collection, or replaces one. This
//! trait is that contract; backends decide what a locator means.

use crate::outcome::LoadOutcome;
use recordstore_core::{Record, Result};
use std::sync::Arc;

/// Whole-collection storage backend
///
/// Thread safety: backends must be `Send + Sync`, but no backend serializes
/// a load/persist pair. Two callers doing read-modify-write on the same
/// locator race, and the later persist wins.
pub trait Storage: Send + Sync {
    /// Load the full collection behind `locator`
    ///
    /// Never fails: missing or corrupt resources come back as
    /// [`LoadOutcome::Recovered`].
    fn load(&self, locator: &str) -> LoadOutcome;

    /// Replace the collection behind `locator` with `records`
    ///
    /// Creates whatever containers the locator implies.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be serialized or written.
    fn persist(&self, locator: &str, records: &[Record]) -> Result<()>;

    /// Remove the collection behind `locator`; absent is not an error
    ///
    /// # Errors
    ///
    /// Returns an error if an existing resource cannot be removed.
    fn erase(&self, locator: &str) -> Result<()>;
}

impl<S: Storage + ?Sized> Storage for Arc<S> {
    fn load(&self, locator: &str) -> LoadOutcome {
        (**self).load(locator)
    }

    fn persist(&self, locator: &str, records: &[Record]) -> Result<()> {
        (**self).persist(locator, records)
    }

    fn erase(&self, locator: &str) -> Result<()> {
        (**self).erase(locator)
    }
}
