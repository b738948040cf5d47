//! recordstore - predicate-driven CRUD over a JSON file of flat records
//!
//! A collection is one JSON array in one file. Every operation loads the
//! whole array, scans it with a caller-supplied predicate, and for
//! mutations writes the whole array back.
//!
//! # Quick Start
//!
//! ```no_run
//! use recordstore::{Record, RecordEngine};
//! use serde_json::json;
//!
//! let engine = RecordEngine::new();
//! let db = "./data/groceriesDB.json";
//!
//! engine.seed(db, &[Record::try_from(json!({"name": "Milk", "price": 3.49}))?])?;
//!
//! let updates = Record::try_from(json!({"onSale": true}))?;
//! let status = engine.patch(db, |r| r.get("name") == Some(&json!("Milk")), &updates)?;
//! println!("{}", status);
//! # Ok::<(), recordstore::Error>(())
//! ```
//!
//! # Architecture
//!
//! - [`Storage`] backends load and replace whole collections
//!   ([`JsonFileStorage`], [`MemoryStorage`]).
//! - [`RecordEngine`] runs the operations against any backend.
//!
//! Writes are not atomic and not locked. Concurrent writers to the same
//! file lose updates, and a crash mid-write leaves a file that loads as an
//! empty collection.

pub use recordstore_core::{assign_ids, assign_ids_from, Error, Record, Result, ID_FIELD};
pub use recordstore_engine::{
    DeleteAllOutcome, DeleteOutcome, PatchOutcome, PutOutcome, RecordEngine, StoreConfig,
    UpdateAllOutcome, CONFIG_FILE_NAME,
};
pub use recordstore_storage::{
    DurabilityMode, JsonFileStorage, LoadOutcome, MemoryStorage, RecoveryReason, Storage,
};
