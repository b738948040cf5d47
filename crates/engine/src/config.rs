//! Store configuration via `recordstore.toml`
//!
//! Two knobs: whether every persist is fsynced, and the indentation width
//! of the persisted JSON. A missing file or missing fields mean defaults.

use recordstore_core::{Error, Result};
use recordstore_storage::{DurabilityMode, JsonFileStorage, DEFAULT_INDENT};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Conventional config file name.
pub const CONFIG_FILE_NAME: &str = "recordstore.toml";

/// Store configuration loaded from `recordstore.toml`.
///
/// # Example
///
/// ```toml
/// # "standard" = overwrite only (default), "always" = fsync after every write
/// durability = "standard"
/// indent = 2
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Durability mode: `"standard"` or `"always"`.
    #[serde(default = "default_durability_str")]
    pub durability: String,
    /// Indentation width of the persisted JSON.
    #[serde(default = "default_indent")]
    pub indent: usize,
}

fn default_durability_str() -> String {
    "standard".to_string()
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            durability: default_durability_str(),
            indent: default_indent(),
        }
    }
}

impl StoreConfig {
    /// Parse the durability string into a `DurabilityMode`.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not `"standard"` or `"always"`.
    pub fn durability_mode(&self) -> Result<DurabilityMode> {
        match self.durability.as_str() {
            "standard" => Ok(DurabilityMode::Standard),
            "always" => Ok(DurabilityMode::Always),
            other => Err(Error::InvalidConfig(format!(
                "Invalid durability mode '{}'. Expected \"standard\" or \"always\".",
                other
            ))),
        }
    }

    /// Build the file backend this config describes.
    pub fn file_storage(&self) -> Result<JsonFileStorage> {
        Ok(JsonFileStorage::new()
            .with_durability(self.durability_mode()?)
            .with_indent(self.indent))
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# recordstore configuration
#
# Durability mode: "standard" (default) or "always"
#   "standard" = overwrite the collection file, no fsync
#   "always"   = fsync the collection file after every overwrite
# Neither mode is atomic: a crash mid-write can truncate the file.
durability = "standard"

# Indentation width of the persisted JSON (default: 2)
indent = 2
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or names an
    /// unknown durability mode.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::InvalidConfig(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: StoreConfig = toml::from_str(&content).map_err(|e| {
            Error::InvalidConfig(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.durability_mode()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
