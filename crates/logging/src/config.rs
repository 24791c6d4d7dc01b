//! crates/logging/src/config.rs
//! Verbosity configuration derived from the `-v` count.

use super::levels::VerbosityLevel;

/// Diagnostic configuration for one invocation.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct VerbosityConfig {
    /// Most detailed level that is printed.
    pub level: VerbosityLevel,
}

impl VerbosityConfig {
    /// Create a configuration from a verbose level (number of `-v` flags).
    pub fn from_verbose_level(level: u8) -> Self {
        let level = match level {
            0 => VerbosityLevel::Warn,
            1 => VerbosityLevel::Info,
            2 => VerbosityLevel::Debug,
            _ => VerbosityLevel::Trace,
        };
        Self { level }
    }

    /// Returns `true` when events at `level` are printed.
    pub fn enabled(self, level: VerbosityLevel) -> bool {
        level <= self.level
    }
}
