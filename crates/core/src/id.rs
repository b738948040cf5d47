//! ID assignment for records entering a collection
//!
//! An id is the decimal string of `base + position`, where `base` is the
//! wall-clock time in milliseconds. The sum wraps rather than overflowing. Two calls within the same millisecond
//! with overlapping positions produce the same ids; nothing here detects it.

use crate::record::Record;
use chrono::Utc;

/// Stamp every record lacking an id, using the current time as the base
///
/// Returns shallow copies; the input slice is not modified. Records that
/// already carry an id are copied unchanged.
pub fn assign_ids(records: &[Record]) -> Vec<Record> {
    assign_ids_from(records, Utc::now().timestamp_millis())
}

/// Stamp every record lacking an id with `base + position`
pub fn assign_ids_from(records: &[Record], base: i64) -> Vec<Record> {
    records
        .iter()
        .enumerate()
        .map(|(position, record)| {
            let mut copy = record.clone();
            if !copy.has_id() {
                copy.set_id(base.wrapping_add(position as i64).to_string());
            }
            copy
        })
        .collect()
}
