//! Record type
//!
//! A record is an open mapping from field name to JSON value. Field order is
//! insertion order and survives a persist/load round trip. Exactly one field,
//! [`ID_FIELD`], carries identity; every other field belongs to the caller.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::ops::{Deref, DerefMut};

/// Name of the reserved identity field
pub const ID_FIELD: &str = "id";

/// A schema-less record
///
/// Newtype around an insertion-ordered `serde_json::Map`:
/// - Direct access to the underlying map via Deref/DerefMut
/// - Transparent on the wire (a plain JSON object)
/// - Identity helpers for the reserved `id` field
///
/// # Examples
///
/// ```
/// use recordstore_core::Record;
/// use serde_json::json;
///
/// let record = Record::try_from(json!({"name": "A", "price": 3})).unwrap();
/// assert_eq!(record.get("price"), Some(&json!(3)));
/// assert!(!record.has_id());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Record(Map::new())
    }

    /// Create from a serde_json map
    pub fn from_map(map: Map<String, Value>) -> Self {
        Record(map)
    }

    /// Get the underlying map
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    /// Get a reference to the underlying map
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// The record's id, when it is a string
    pub fn id(&self) -> Option<&str> {
        self.0.get(ID_FIELD).and_then(Value::as_str)
    }

    /// Whether the record carries a usable id
    ///
    /// Only a non-empty string counts. Everything else (absent, `null`,
    /// `""`, numbers, booleans) is what [`assign_ids`](crate::assign_ids)
    /// stamps over.
    pub fn has_id(&self) -> bool {
        self.id().is_some_and(|id| !id.is_empty())
    }

    /// Set the id, keeping the field's position if it already exists
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.0.insert(ID_FIELD.to_string(), Value::String(id.into()));
    }

    /// Builder form of [`set_id`](Self::set_id)
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.set_id(id);
        self
    }

    /// Shallow merge: fields of `updates` overwrite same-named fields,
    /// all other fields survive. `id` is not protected.
    pub fn merged(&self, updates: &Record) -> Record {
        let mut out = self.clone();
        for (field, value) in updates.iter() {
            out.0.insert(field.clone(), value.clone());
        }
        out
    }

    /// Total replacement by `payload`, keeping this record's `id`
    ///
    /// Every field of `self` other than `id` is dropped. If `self` has no
    /// `id` field, any `id` the payload carries is dropped as well.
    pub fn replaced_by(&self, payload: &Record) -> Record {
        let mut out = payload.clone();
        match self.0.get(ID_FIELD) {
            Some(id) => {
                out.0.insert(ID_FIELD.to_string(), id.clone());
            }
            None => {
                out.0.shift_remove(ID_FIELD);
            }
        }
        out
    }

    /// Serialize to compact JSON string
    pub fn to_json_string(&self) -> String {
        // Display for Value writes compact JSON and has no error path
        Value::Object(self.0.clone()).to_string()
    }
}

impl Deref for Record {
    type Target = Map<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Record {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json_string())
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Record(map)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Object(record.0)
    }
}

impl TryFrom<Value> for Record {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Record(map)),
            other => Err(Error::InvalidRecord(format!(
                "expected a JSON object, got {}",
                kind_of(&other)
            ))),
        }
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Record(iter.into_iter().collect())
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
