//! JSON file backend
//!
//! A locator is a filesystem path. The collection is stored as one
//! pretty-printed JSON array; every persist truncates and rewrites the
//! whole file. There is no temp-file rename, so a crash mid-write can
//! leave a truncated file behind. The next load then reports it as
//! malformed and the collection reads as empty.

use crate::adapter::Storage;
use crate::mode::DurabilityMode;
use crate::outcome::{LoadOutcome, RecoveryReason};
use recordstore_core::{Record, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Default indentation width of the pretty printer
pub const DEFAULT_INDENT: usize = 2;

/// File-per-collection storage
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    durability: DurabilityMode,
    indent: usize,
}

impl Default for JsonFileStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonFileStorage {
    /// Standard durability, two-space indentation
    pub fn new() -> Self {
        Self {
            durability: DurabilityMode::Standard,
            indent: DEFAULT_INDENT,
        }
    }

    /// Set the durability mode
    pub fn with_durability(mut self, durability: DurabilityMode) -> Self {
        self.durability = durability;
        self
    }

    /// Set the indentation width
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Current durability mode
    pub fn durability(&self) -> DurabilityMode {
        self.durability
    }

    /// Current indentation width
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Render a collection the way [`persist`](Storage::persist) writes it
    pub fn render(&self, records: &[Record]) -> Result<Vec<u8>> {
        let indent = vec![b' '; self.indent];
        let mut buf = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
        records.serialize(&mut serializer)?;
        Ok(buf)
    }
}

impl Storage for JsonFileStorage {
    fn load(&self, locator: &str) -> LoadOutcome {
        let content = match fs::read_to_string(locator) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(target: "recordstore::storage", locator, "Collection missing, reading as empty");
                return LoadOutcome::recovered(RecoveryReason::Missing);
            }
            Err(e) => {
                warn!(
                    target: "recordstore::storage",
                    locator,
                    error = %e,
                    "Collection unreadable, reading as empty"
                );
                return LoadOutcome::recovered(RecoveryReason::Unreadable(e.to_string()));
            }
        };

        match serde_json::from_str::<Vec<Record>>(&content) {
            Ok(records) => LoadOutcome::Loaded(records),
            Err(e) => {
                warn!(
                    target: "recordstore::storage",
                    locator,
                    error = %e,
                    "Collection malformed, reading as empty. The next write will overwrite it."
                );
                LoadOutcome::recovered(RecoveryReason::Malformed(e.to_string()))
            }
        }
    }

    fn persist(&self, locator: &str, records: &[Record]) -> Result<()> {
        let path = Path::new(locator);
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }

        let bytes = self.render(records)?;
        let mut file = File::create(path)?;
        file.write_all(&bytes)?;
        if self.durability.requires_fsync() {
            file.sync_all()?;
        }

        debug!(
            target: "recordstore::storage",
            locator,
            records = records.len(),
            durability = self.durability.as_str(),
            "Collection persisted"
        );
        Ok(())
    }

    fn erase(&self, locator: &str) -> Result<()> {
        match fs::remove_file(locator) {
            Ok(()) => {
                debug!(target: "recordstore::storage", locator, "Collection erased");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
