//! crates/logging/src/tracing_bridge.rs
//! Installation of the stderr `tracing` subscriber.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{VerbosityConfig, init_tracing, targets};
//!
//! init_tracing(VerbosityConfig::from_verbose_level(2));
//!
//! tracing::debug!(target: targets::QUERY, mask = 0x5b0, "supported mask");
//! ```

use std::io::{self, IsTerminal};

use super::config::VerbosityConfig;
use super::levels::VerbosityLevel;
use crate::targets;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::Targets;

/// Map a verbosity level to a tracing level filter.
pub const fn level_filter(level: VerbosityLevel) -> LevelFilter {
    match level {
        VerbosityLevel::Warn => LevelFilter::WARN,
        VerbosityLevel::Info => LevelFilter::INFO,
        VerbosityLevel::Debug => LevelFilter::DEBUG,
        VerbosityLevel::Trace => LevelFilter::TRACE,
    }
}

/// Build the target filter: rtmask targets at the configured level, nothing else.
pub fn target_filter(config: VerbosityConfig) -> Targets {
    Targets::new()
        .with_target(targets::ROOT, level_filter(config.level))
        .with_default(LevelFilter::OFF)
}

/// Initialize tracing for the given verbosity.
///
/// Events are written to standard error without timestamps. Returns `false`
/// when a global subscriber was already installed; the existing one is kept.
pub fn init_tracing(config: VerbosityConfig) -> bool {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let fmt = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .without_time()
        .with_target(config.level >= VerbosityLevel::Debug);

    tracing_subscriber::registry()
        .with(fmt)
        .with(target_filter(config))
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    #[test]
    fn level_filter_tracks_verbosity() {
        assert_eq!(level_filter(VerbosityLevel::Warn), LevelFilter::WARN);
        assert_eq!(level_filter(VerbosityLevel::Trace), LevelFilter::TRACE);
    }

    #[test]
    fn target_filter_silences_foreign_targets() {
        let filter = target_filter(VerbosityConfig::from_verbose_level(3));
        assert!(filter.would_enable(targets::QUERY, &Level::TRACE));
        assert!(!filter.would_enable("mio::poll", &Level::ERROR));
    }

    #[test]
    fn target_filter_respects_the_configured_level() {
        let filter = target_filter(VerbosityConfig::from_verbose_level(1));
        assert!(filter.would_enable(targets::DEVICE, &Level::INFO));
        assert!(!filter.would_enable(targets::DEVICE, &Level::DEBUG));
    }

    #[test]
    fn second_installation_is_rejected_without_panicking() {
        let config = VerbosityConfig::default();
        let _ = init_tracing(config);
        assert!(!init_tracing(config));
    }
}
