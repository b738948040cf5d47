//! Storage layer for recordstore
//!
//! This crate loads and replaces whole collections:
//! - Storage: backend trait (load, persist, erase)
//! - LoadOutcome: loaded sequence vs. recovered-empty with a reason
//! - JsonFileStorage: one pretty-printed JSON array per file
//! - MemoryStorage: HashMap-backed backend for tests
//! - DurabilityMode: whether writes are fsynced

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapter;
pub mod file;
pub mod memory;
pub mod mode;
pub mod outcome;

pub use adapter::Storage;
pub use file::{JsonFileStorage, DEFAULT_INDENT};
pub use memory::MemoryStorage;
pub use mode::DurabilityMode;
pub use outcome::{LoadOutcome, RecoveryReason};
