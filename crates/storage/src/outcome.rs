//! Load outcomes
//!
//! Loading never fails. A resource that is missing, unreadable or not a
//! JSON array of objects comes back as `Recovered`, which callers usually
//! fold into an empty collection with [`LoadOutcome::into_records`].

use recordstore_core::Record;
use std::fmt;

/// Why a load fell back to an empty collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecoveryReason {
    /// The resource does not exist
    Missing,
    /// The resource exists but could not be read
    Unreadable(String),
    /// The content is not a JSON array of objects
    Malformed(String),
}

impl fmt::Display for RecoveryReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecoveryReason::Missing => f.write_str("resource missing"),
            RecoveryReason::Unreadable(e) => write!(f, "resource unreadable: {}", e),
            RecoveryReason::Malformed(e) => write!(f, "resource malformed: {}", e),
        }
    }
}

/// Result of loading a collection
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The resource parsed into this sequence (possibly empty)
    Loaded(Vec<Record>),
    /// The resource could not be used; the collection counts as empty
    Recovered {
        /// What went wrong
        reason: RecoveryReason,
    },
}

impl LoadOutcome {
    /// Shorthand for a recovered outcome
    pub fn recovered(reason: RecoveryReason) -> Self {
        LoadOutcome::Recovered { reason }
    }

    /// The loaded records, or an empty sequence when recovered
    pub fn into_records(self) -> Vec<Record> {
        match self {
            LoadOutcome::Loaded(records) => records,
            LoadOutcome::Recovered { .. } => Vec::new(),
        }
    }

    /// Borrowing form of [`into_records`](Self::into_records)
    pub fn records(&self) -> &[Record] {
        match self {
            LoadOutcome::Loaded(records) => records,
            LoadOutcome::Recovered { .. } => &[],
        }
    }

    /// Whether the load fell back to an empty collection
    pub fn is_recovered(&self) -> bool {
        matches!(self, LoadOutcome::Recovered { .. })
    }

    /// The recovery reason, if any
    pub fn recovery(&self) -> Option<&RecoveryReason> {
        match self {
            LoadOutcome::Loaded(_) => None,
            LoadOutcome::Recovered { reason } => Some(reason),
        }
    }
}
