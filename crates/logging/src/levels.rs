//! crates/logging/src/levels.rs
//! Diagnostic levels selectable from the command line.

/// Most detailed diagnostic level that is printed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VerbosityLevel {
    /// Warnings and errors only (no `-v`).
    #[default]
    Warn,
    /// Progress of the device session (`-v`).
    Info,
    /// Raw query results (`-vv`).
    Debug,
    /// Everything (`-vvv` and above).
    Trace,
}

impl VerbosityLevel {
    /// Name of the level as printed by the subscriber.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}
