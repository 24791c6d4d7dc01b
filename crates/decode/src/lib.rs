#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `decode` turns the two raw values reported by the Linux `efi_test` driver
//! into text. The `RuntimeServicesSupported` field of the firmware's
//! `EFI_RT_PROPERTIES_TABLE` is a bitmask with one bit per runtime service;
//! the `Revision` field of the UEFI system table packs the specification
//! version into a single 32-bit integer.
//!
//! # Design
//!
//! - [`flags`] holds the fixed, ordered table of runtime service labels.
//! - [`mask`] walks that table against a mask and yields one [`MaskLine`]
//!   per set bit, marking the first with `=` and the rest with `|`.
//! - [`revision`] splits a packed revision into major, minor and patch.
//!
//! Nothing in this crate performs I/O, so every decoder can be exercised
//! without the device present.
//!
//! # Examples
//!
//! ```
//! use decode::{Revision, decode};
//!
//! let lines: Vec<String> = decode(0x30).map(|line| line.to_string()).collect();
//! assert_eq!(
//!     lines,
//!     [
//!         "= EFI_RT_SUPPORTED_GET_VARIABLE",
//!         "| EFI_RT_SUPPORTED_GET_NEXT_VARIABLE_NAME",
//!     ]
//! );
//!
//! assert_eq!(Revision::new(0x0002_0052).to_string(), "2.8.2");
//! ```

pub mod flags;
pub mod mask;
pub mod revision;

pub use flags::{DEFINED_MASK, RUNTIME_SERVICES, RuntimeService};
pub use mask::{MaskLine, MaskLines, Marker, decode, decode_with, undefined_bits};
pub use revision::Revision;
