//! Core types for recordstore
//!
//! This crate defines the foundational types used throughout the system:
//! - Record: schema-less, insertion-ordered JSON object with a reserved `id`
//! - ID assignment: wall-clock based ids for records entering a collection
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod id;
pub mod record;

pub use error::{Error, Result};
pub use id::{assign_ids, assign_ids_from};
pub use record::{Record, ID_FIELD};
