//! UEFI system table revision.
//!
//! The upper 16 bits carry the major version. The lower 16 bits carry the
//! minor version times ten plus a single patch digit, so UEFI 2.8 is
//! `0x0002_0050` and UEFI 2.3.1 is `0x0002_001f`.

use std::fmt;

/// Packed UEFI specification revision as reported by the firmware.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Revision(u32);

impl Revision {
    /// Wraps a raw revision value. Every value is accepted.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Packs `major.minor.patch`.
    ///
    /// Returns `None` when `patch` is not a single digit or the packed minor
    /// and patch do not fit in 16 bits.
    ///
    /// ```
    /// use decode::Revision;
    ///
    /// assert_eq!(Revision::from_parts(2, 3, 1).map(Revision::raw), Some(0x0002_001f));
    /// assert_eq!(Revision::from_parts(2, 8, 10), None);
    /// ```
    #[must_use]
    pub fn from_parts(major: u16, minor: u16, patch: u16) -> Option<Self> {
        if patch > 9 {
            return None;
        }
        let low = minor.checked_mul(10)?.checked_add(patch)?;
        Some(Self((u32::from(major) << 16) | u32::from(low)))
    }

    /// Returns the raw packed value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Major version, the upper 16 bits.
    #[must_use]
    pub const fn major(self) -> u16 {
        (self.0 >> 16) as u16
    }

    /// Minor version, the lower 16 bits divided by ten.
    #[must_use]
    pub const fn minor(self) -> u16 {
        self.low() / 10
    }

    /// Patch digit, or `None` when it is zero.
    #[must_use]
    pub const fn patch(self) -> Option<u16> {
        match self.low() % 10 {
            0 => None,
            patch => Some(patch),
        }
    }

    const fn low(self) -> u16 {
        (self.0 & 0xffff) as u16
    }
}

impl From<u32> for Revision {
    fn from(raw: u32) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.patch() {
            Some(patch) => write!(f, "{}.{}.{}", self.major(), self.minor(), patch),
            None => write!(f, "{}.{}", self.major(), self.minor()),
        }
    }
}
