//! Record operations engine for recordstore
//!
//! This crate implements CRUD on top of the storage layer:
//! - RecordEngine: find/delete/put/patch/update by caller predicate
//! - Outcomes: status values for every mutation ("not found" is not an error)
//! - StoreConfig: `recordstore.toml` settings for the file backend
//!
//! The engine is the only component that knows about:
//! - Predicate scans over a loaded collection
//! - Identity rules (put keeps `id`, patch does not protect it)
//! - When a mutation writes and when it leaves the resource alone

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod engine;
pub mod outcome;

pub use config::{StoreConfig, CONFIG_FILE_NAME};
pub use engine::RecordEngine;
pub use outcome::{DeleteAllOutcome, DeleteOutcome, PatchOutcome, PutOutcome, UpdateAllOutcome};
