//! Stand-in for platforms without the `efi_test` driver.

use std::io;
use std::path::{Path, PathBuf};

use crate::error::EfiTestError;
use crate::{EFI_TEST_DEVICE, RuntimeQuery};

/// Handle type that can never be opened outside Linux.
#[derive(Debug)]
pub struct EfiTestDevice {
    path: PathBuf,
}

impl EfiTestDevice {
    /// Always fails: `efi_test` is a Linux driver.
    pub fn open() -> Result<Self, EfiTestError> {
        Self::open_at(EFI_TEST_DEVICE)
    }

    /// Always fails: `efi_test` is a Linux driver.
    pub fn open_at(path: impl AsRef<Path>) -> Result<Self, EfiTestError> {
        Err(EfiTestError::open(
            path,
            io::Error::new(
                io::ErrorKind::Unsupported,
                "the efi_test driver is only available on Linux",
            ),
        ))
    }

    /// Path the device was opened from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RuntimeQuery for EfiTestDevice {
    fn supported_mask(&self) -> Result<u32, EfiTestError> {
        Err(EfiTestError::open(
            &self.path,
            io::Error::from(io::ErrorKind::Unsupported),
        ))
    }

    fn revision(&self) -> Result<u32, EfiTestError> {
        Err(EfiTestError::open(
            &self.path,
            io::Error::from(io::ErrorKind::Unsupported),
        ))
    }
}
