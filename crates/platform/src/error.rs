//! Failures of the `efi_test` device and its queries.

use std::io;
use std::path::{Path, PathBuf};

use crate::query::Query;

/// Guidance printed when `/dev/efi_test` does not exist.
pub const MISSING_DRIVER_HINT: &str = "Kernel must be compiled with CONFIG_EFI_TEST";

/// Error raised while opening the device or issuing a query.
#[derive(Debug, thiserror::Error)]
pub enum EfiTestError {
    /// The device node does not exist, so the driver is not loaded.
    #[error("open {}: {}", .path.display(), .source)]
    Unavailable {
        /// Device path that was tried.
        path: PathBuf,
        /// Underlying `ENOENT`.
        #[source]
        source: io::Error,
    },

    /// The device exists but could not be opened.
    #[error("open {}: {}", .path.display(), .source)]
    Open {
        /// Device path that was tried.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The driver does not implement this query (`ENOTTY`).
    #[error("The IOCTL {query} is not implemented")]
    Unimplemented {
        /// Query that was rejected.
        query: Query,
    },

    /// The query failed for any other reason.
    #[error("ioctl {}: {}", .query.name(), .source)]
    Failed {
        /// Query that failed.
        query: Query,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },
}

impl EfiTestError {
    /// Classifies a failure to open `path`.
    pub fn open(path: impl AsRef<Path>, source: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        if source.kind() == io::ErrorKind::NotFound {
            Self::Unavailable { path, source }
        } else {
            Self::Open { path, source }
        }
    }

    /// Returns the query this error belongs to, if any.
    #[must_use]
    pub const fn query(&self) -> Option<Query> {
        match self {
            Self::Unimplemented { query } | Self::Failed { query, .. } => Some(*query),
            Self::Unavailable { .. } | Self::Open { .. } => None,
        }
    }

    /// Returns `true` when the driver lacks the query rather than failing it.
    #[must_use]
    pub const fn is_unimplemented(&self) -> bool {
        matches!(self, Self::Unimplemented { .. })
    }

    /// Advice for the user, when there is any beyond the error itself.
    #[must_use]
    pub const fn guidance(&self) -> Option<&'static str> {
        match self {
            Self::Unavailable { .. } => Some(MISSING_DRIVER_HINT),
            _ => None,
        }
    }
}
