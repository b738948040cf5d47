//! Operation outcomes
//!
//! "No match" is an ordinary result, not an error. Each outcome displays as
//! the status line callers print.

use recordstore_core::Record;
use std::fmt;

/// Result of deleting the first match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// One record was removed and the collection persisted
    Deleted,
    /// Nothing matched; nothing was written
    NotFound,
}

impl DeleteOutcome {
    /// Whether nothing matched
    pub fn is_not_found(&self) -> bool {
        matches!(self, DeleteOutcome::NotFound)
    }
}

impl fmt::Display for DeleteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteOutcome::Deleted => f.write_str("deleted"),
            DeleteOutcome::NotFound => f.write_str("not found"),
        }
    }
}

/// Result of deleting every match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteAllOutcome {
    /// How many records were removed
    pub removed: usize,
}

impl fmt::Display for DeleteAllOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deleted {} items", self.removed)
    }
}

/// Result of a full replacement
#[derive(Debug, Clone, PartialEq)]
pub enum PutOutcome {
    /// The replacement as stored
    Updated(Record),
    /// Nothing matched; nothing was written
    NotFound,
}

impl PutOutcome {
    /// The stored replacement, if any
    pub fn record(&self) -> Option<&Record> {
        match self {
            PutOutcome::Updated(record) => Some(record),
            PutOutcome::NotFound => None,
        }
    }

    /// Whether nothing matched
    pub fn is_not_found(&self) -> bool {
        matches!(self, PutOutcome::NotFound)
    }
}

impl fmt::Display for PutOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PutOutcome::Updated(record) => write!(f, "updated: {}", record),
            PutOutcome::NotFound => f.write_str("not found"),
        }
    }
}

/// Result of a shallow merge
#[derive(Debug, Clone, PartialEq)]
pub enum PatchOutcome {
    /// The merged record as stored
    Patched(Record),
    /// Nothing matched; nothing was written
    NotFound,
}

impl PatchOutcome {
    /// The stored merge result, if any
    pub fn record(&self) -> Option<&Record> {
        match self {
            PatchOutcome::Patched(record) => Some(record),
            PatchOutcome::NotFound => None,
        }
    }

    /// Whether nothing matched
    pub fn is_not_found(&self) -> bool {
        matches!(self, PatchOutcome::NotFound)
    }
}

impl fmt::Display for PatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchOutcome::Patched(record) => write!(f, "patched: {}", record),
            PatchOutcome::NotFound => f.write_str("not found"),
        }
    }
}

/// Result of transforming every match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateAllOutcome {
    /// How many records the transform was applied to
    pub updated: usize,
}

impl fmt::Display for UpdateAllOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Updated {} items", self.updated)
    }
}
