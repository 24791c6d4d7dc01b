#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` maps the `-v` count given on the command line to a diagnostic
//! level and, with the `tracing` feature, installs a subscriber that prints
//! `tracing` events from rtmask's own targets to standard error.
//!
//! Standard output belongs to the report. Diagnostics never go there.
//!
//! # Targets
//!
//! Events are grouped under [`targets`]; everything outside the
//! [`targets::ROOT`] prefix is discarded so dependencies stay quiet.
//!
//! # Examples
//!
//! ```
//! use logging::{VerbosityConfig, VerbosityLevel};
//!
//! assert_eq!(VerbosityConfig::from_verbose_level(0).level, VerbosityLevel::Warn);
//! assert_eq!(VerbosityConfig::from_verbose_level(2).level, VerbosityLevel::Debug);
//! ```

mod config;
mod levels;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::VerbosityConfig;
pub use levels::VerbosityLevel;
#[cfg(feature = "tracing")]
pub use tracing_bridge::{init_tracing, level_filter, target_filter};

/// Tracing targets used across the workspace.
pub mod targets {
    /// Prefix shared by every rtmask target.
    pub const ROOT: &str = "rtmask";
    /// Opening and releasing `/dev/efi_test`.
    pub const DEVICE: &str = "rtmask::device";
    /// ioctl results.
    pub const QUERY: &str = "rtmask::query";
    /// Mask and revision decoding.
    pub const DECODE: &str = "rtmask::decode";
}
