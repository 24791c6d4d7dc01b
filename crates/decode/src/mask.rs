//! Decoding of the `RuntimeServicesSupported` mask.
//!
//! The decoder walks the service table in order, pairing table position `k`
//! with candidate bit `1 << k`. A set bit yields a [`MaskLine`]; the first
//! line of a decode carries [`Marker::First`] and every later line
//! [`Marker::Continuation`], which renders as the familiar
//!
//! ```text
//! = EFI_RT_SUPPORTED_GET_VARIABLE
//! | EFI_RT_SUPPORTED_GET_NEXT_VARIABLE_NAME
//! ```
//!
//! Bits beyond the end of the table are never examined.

use std::fmt;
use std::iter::FusedIterator;
use std::slice;

use crate::flags::{DEFINED_MASK, RUNTIME_SERVICES, RuntimeService};

/// Prefix printed in front of a decoded service label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    /// First line of a decode, rendered as `=`.
    First,
    /// Any later line, rendered as `|`.
    Continuation,
}

impl Marker {
    /// Returns the character printed for this marker.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::First => '=',
            Self::Continuation => '|',
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One decoded line: a marker followed by the label of a supported service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaskLine {
    /// `=` for the first emitted line, `|` afterwards.
    pub marker: Marker,
    /// Service whose bit was set.
    pub service: RuntimeService,
}

impl fmt::Display for MaskLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.marker, self.service.label)
    }
}

/// Whether a decode has produced a line yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Emission {
    NoneYet,
    AtLeastOne,
}

/// Lazy iterator over the lines of a mask decode.
///
/// Created by [`decode`] and [`decode_with`].
#[derive(Clone, Debug)]
pub struct MaskLines<'a> {
    mask: u32,
    table: slice::Iter<'a, RuntimeService>,
    candidate: Option<u32>,
    emission: Emission,
}

impl<'a> MaskLines<'a> {
    fn new(mask: u32, table: &'a [RuntimeService]) -> Self {
        Self {
            mask,
            table: table.iter(),
            candidate: Some(1),
            emission: Emission::NoneYet,
        }
    }

    fn next_marker(&mut self) -> Marker {
        match self.emission {
            Emission::NoneYet => {
                self.emission = Emission::AtLeastOne;
                Marker::First
            }
            Emission::AtLeastOne => Marker::Continuation,
        }
    }
}

impl Iterator for MaskLines<'_> {
    type Item = MaskLine;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let candidate = self.candidate?;
            let Some(&service) = self.table.next() else {
                self.candidate = None;
                return None;
            };
            self.candidate = candidate.checked_mul(2);

            if candidate & self.mask != 0 {
                let marker = self.next_marker();
                return Some(MaskLine { marker, service });
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.candidate {
            Some(_) => (0, Some(self.table.len())),
            None => (0, Some(0)),
        }
    }
}

impl FusedIterator for MaskLines<'_> {}

/// Decodes `mask` against [`RUNTIME_SERVICES`].
///
/// # Examples
///
/// ```
/// use decode::decode;
///
/// assert_eq!(decode(0).count(), 0);
/// assert_eq!(
///     decode(0x400).next().map(|line| line.to_string()).as_deref(),
///     Some("= EFI_RT_SUPPORTED_RESET_SYSTEM")
/// );
/// ```
#[must_use]
pub fn decode(mask: u32) -> MaskLines<'static> {
    decode_with(mask, &RUNTIME_SERVICES)
}

/// Decodes `mask` against an arbitrary table, position `k` standing for bit `k`.
#[must_use]
pub fn decode_with(mask: u32, table: &[RuntimeService]) -> MaskLines<'_> {
    MaskLines::new(mask, table)
}

/// Returns the bits of `mask` that no runtime service is defined for.
#[must_use]
pub const fn undefined_bits(mask: u32) -> u32 {
    mask & !DEFINED_MASK
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rendered(mask: u32) -> Vec<String> {
        decode(mask).map(|line| line.to_string()).collect()
    }

    #[test]
    fn firmware_sample_mask_decodes_in_bit_order() {
        assert_eq!(
            rendered(0x0000_05b0),
            [
                "= EFI_RT_SUPPORTED_GET_VARIABLE",
                "| EFI_RT_SUPPORTED_GET_NEXT_VARIABLE_NAME",
                "| EFI_RT_SUPPORTED_SET_VIRTUAL_ADDRESS_MAP",
                "| EFI_RT_SUPPORTED_CONVERT_POINTER",
                "| EFI_RT_SUPPORTED_RESET_SYSTEM",
            ]
        );
    }

    #[test]
    fn empty_mask_yields_nothing() {
        assert!(rendered(0).is_empty());
    }

    #[test]
    fn bits_above_the_table_are_ignored() {
        assert!(rendered(0xffff_c000).is_empty());
        assert_eq!(rendered(0xffff_e000), ["= EFI_RT_SUPPORTED_QUERY_VARIABLE_INFO"]);
    }

    #[test]
    fn full_mask_lists_every_service_once() {
        let lines: Vec<MaskLine> = decode(u32::MAX).collect();
        assert_eq!(lines.len(), RUNTIME_SERVICES.len());
        assert_eq!(lines[0].marker, Marker::First);
        assert!(lines[1..].iter().all(|line| line.marker == Marker::Continuation));
        let services: Vec<RuntimeService> = lines.iter().map(|line| line.service).collect();
        assert_eq!(services, RUNTIME_SERVICES);
    }

    #[test]
    fn first_marker_follows_emission_not_position() {
        let lines: Vec<MaskLine> = decode(0x2000 | 0x200).collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].marker, Marker::First);
        assert_eq!(lines[0].service.bit, 9);
        assert_eq!(lines[1].marker, Marker::Continuation);
        assert_eq!(lines[1].service.bit, 13);
    }

    #[test]
    fn iterator_is_fused_after_exhaustion() {
        let mut lines = decode(0x1);
        assert!(lines.next().is_some());
        assert!(lines.next().is_none());
        assert!(lines.next().is_none());
        assert_eq!(lines.size_hint(), (0, Some(0)));
    }

    #[test]
    fn short_table_bounds_the_walk() {
        let table = &RUNTIME_SERVICES[..2];
        let lines: Vec<String> = decode_with(0b111, table)
            .map(|line| line.to_string())
            .collect();
        assert_eq!(
            lines,
            ["= EFI_RT_SUPPORTED_GET_TIME", "| EFI_RT_SUPPORTED_SET_TIME"]
        );
    }

    #[test]
    fn oversized_table_stops_at_the_last_representable_bit() {
        let table = [RUNTIME_SERVICES[0]; 40];
        assert_eq!(decode_with(u32::MAX, &table).count(), 32);
    }

    #[test]
    fn undefined_bits_isolates_high_bits() {
        assert_eq!(undefined_bits(0x0000_05b0), 0);
        assert_eq!(undefined_bits(0x8000_05b0), 0x8000_0000);
        assert_eq!(undefined_bits(0xffff_ffff), 0xffff_c000);
    }

    proptest! {
        #[test]
        fn masks_without_table_bits_decode_to_nothing(high in any::<u32>()) {
            prop_assert_eq!(decode(high & !DEFINED_MASK).count(), 0);
        }

        #[test]
        fn single_bit_yields_first_marker_and_its_label(bit in 0usize..14) {
            let lines: Vec<MaskLine> = decode(1 << bit).collect();
            prop_assert_eq!(lines.len(), 1);
            prop_assert_eq!(lines[0].marker, Marker::First);
            prop_assert_eq!(lines[0].service.label, RUNTIME_SERVICES[bit].label);
        }

        #[test]
        fn markers_and_order_hold_for_any_mask(mask in any::<u32>()) {
            let lines: Vec<MaskLine> = decode(mask).collect();
            prop_assert_eq!(lines.len(), (mask & DEFINED_MASK).count_ones() as usize);
            for (index, line) in lines.iter().enumerate() {
                let expected = if index == 0 { Marker::First } else { Marker::Continuation };
                prop_assert_eq!(line.marker, expected);
            }
            prop_assert!(lines.windows(2).all(|pair| pair[0].service.bit < pair[1].service.bit));
        }

        #[test]
        fn high_bits_never_change_the_output(mask in any::<u32>(), high in any::<u32>()) {
            let low = mask & DEFINED_MASK;
            let with_high = low | (high & !DEFINED_MASK);
            prop_assert_eq!(rendered(low), rendered(with_high));
        }
    }
}
