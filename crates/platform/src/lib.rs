#![deny(unsafe_code)]
#![deny(missing_docs)]

//! Access to the Linux `efi_test` driver.
//!
//! The kernel exposes the firmware's `RuntimeServicesSupported` mask and the
//! UEFI system table revision through two read-only ioctls on
//! `/dev/efi_test` (`CONFIG_EFI_TEST`). This crate owns the device handle and
//! keeps the `unsafe` ioctl calls in one place; everything above it talks to
//! the [`RuntimeQuery`] trait.
//!
//! ```no_run
//! use platform::{EfiTestDevice, RuntimeQuery};
//!
//! let device = EfiTestDevice::open()?;
//! println!("RuntimeServicesSupported = {:#010x}", device.supported_mask()?);
//! # Ok::<(), platform::EfiTestError>(())
//! ```

mod error;
mod query;


pub use efi_test::EfiTestDevice;
pub use error::{EfiTestError, MISSING_DRIVER_HINT};
pub use query::Query;

#[cfg(any(test, feature = "mockall"))]
use mockall::automock;

/// Path of the character device created by the `efi_test` module.
pub const EFI_TEST_DEVICE: &str = "/dev/efi_test";

/// The two firmware queries the `efi_test` driver answers.
///
/// Both are single-shot: implementations never retry.
#[cfg_attr(any(test, feature = "mockall"), automock)]
pub trait RuntimeQuery {
    /// Reads `RuntimeServicesSupported` from the EFI_RT_PROPERTIES_TABLE.
    fn supported_mask(&self) -> Result<u32, EfiTestError>;

    /// Reads the `Revision` field of the UEFI system table.
    fn revision(&self) -> Result<u32, EfiTestError>;
}
