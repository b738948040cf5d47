//! Durability mode configuration
//!
//! Controls whether a persisted collection is fsynced (Standard, Always).

/// Durability mode for collection writes
///
/// Neither mode makes the overwrite atomic. A crash between truncating the
/// file and finishing the write leaves a partial file, which the next load
/// reports as malformed and treats as an empty collection.
///
/// # Modes
///
/// | Mode | fsync | Data Loss Window |
/// |------|-------|-----------------|
/// | Standard | Never | Whatever the OS has not flushed |
/// | Always | Every persist | Only a write in progress |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DurabilityMode {
    /// Overwrite the file and return (the default)
    #[default]
    Standard,

    /// Overwrite the file, then fsync it before returning
    Always,
}

impl DurabilityMode {
    /// Check if this mode requires an fsync after each persist
    pub fn requires_fsync(&self) -> bool {
        matches!(self, DurabilityMode::Always)
    }

    /// Name used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            DurabilityMode::Standard => "standard",
            DurabilityMode::Always => "always",
        }
    }
}
