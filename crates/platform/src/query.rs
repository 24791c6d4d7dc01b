//! Identifiers of the `efi_test` ioctls.

use std::fmt;

/// ioctl magic shared by every `efi_test` request.
pub(crate) const EFI_TEST_MAGIC: u8 = b'p';

/// One of the two `efi_test` queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Query {
    /// `EFI_RUNTIME_GET_SUPPORTED_MASK`, available since Linux 5.11.
    SupportedMask,
    /// `EFI_RUNTIME_GET_REVISION`, newer and frequently missing.
    Revision,
}

impl Query {
    /// Request number within the `efi_test` magic.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::SupportedMask => 0x0c,
            Self::Revision => 0x0d,
        }
    }

    /// Name of the ioctl as spelled in the kernel headers.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SupportedMask => "EFI_RUNTIME_GET_SUPPORTED_MASK",
            Self::Revision => "EFI_RUNTIME_GET_REVISION",
        }
    }

    /// Encoded request code, `_IOR('p', number, unsigned int)`, in the generic
    /// Linux ioctl layout used by x86, arm and riscv.
    #[must_use]
    pub const fn request_code(self) -> u32 {
        const IOC_READ: u32 = 2;
        const SIZE: u32 = size_of::<u32>() as u32;
        (IOC_READ << 30) | (SIZE << 16) | ((EFI_TEST_MAGIC as u32) << 8) | self.number() as u32
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:#010x})", self.name(), self.request_code())
    }
}
