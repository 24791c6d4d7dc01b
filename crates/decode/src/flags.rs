//! Runtime service labels in `RuntimeServicesSupported` bit order.

/// A single runtime service bit of the `RuntimeServicesSupported` mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RuntimeService {
    /// Bit position within the mask.
    pub bit: u32,
    /// `EFI_RT_SUPPORTED_*` name of the service.
    pub label: &'static str,
}

impl RuntimeService {
    const fn new(bit: u32, label: &'static str) -> Self {
        Self { bit, label }
    }

    /// Returns the mask value of this service (`1 << bit`).
    #[must_use]
    pub const fn value(self) -> u32 {
        1 << self.bit
    }
}

/// Every runtime service defined by UEFI 2.8, ordered by ascending bit.
pub const RUNTIME_SERVICES: [RuntimeService; 14] = [
    RuntimeService::new(0, "EFI_RT_SUPPORTED_GET_TIME"),
    RuntimeService::new(1, "EFI_RT_SUPPORTED_SET_TIME"),
    RuntimeService::new(2, "EFI_RT_SUPPORTED_GET_WAKEUP_TIME"),
    RuntimeService::new(3, "EFI_RT_SUPPORTED_SET_WAKEUP_TIME"),
    RuntimeService::new(4, "EFI_RT_SUPPORTED_GET_VARIABLE"),
    RuntimeService::new(5, "EFI_RT_SUPPORTED_GET_NEXT_VARIABLE_NAME"),
    RuntimeService::new(6, "EFI_RT_SUPPORTED_SET_VARIABLE"),
    RuntimeService::new(7, "EFI_RT_SUPPORTED_SET_VIRTUAL_ADDRESS_MAP"),
    RuntimeService::new(8, "EFI_RT_SUPPORTED_CONVERT_POINTER"),
    RuntimeService::new(9, "EFI_RT_SUPPORTED_GET_NEXT_HIGH_MONOTONIC_COUNT"),
    RuntimeService::new(10, "EFI_RT_SUPPORTED_RESET_SYSTEM"),
    RuntimeService::new(11, "EFI_RT_SUPPORTED_UPDATE_CAPSULE"),
    RuntimeService::new(12, "EFI_RT_SUPPORTED_QUERY_CAPSULE_CAPABILITIES"),
    RuntimeService::new(13, "EFI_RT_SUPPORTED_QUERY_VARIABLE_INFO"),
];

/// Union of every bit named in [`RUNTIME_SERVICES`].
pub const DEFINED_MASK: u32 = defined_mask(&RUNTIME_SERVICES);

const fn defined_mask(table: &[RuntimeService]) -> u32 {
    let mut mask = 0;
    let mut index = 0;
    while index < table.len() {
        mask |= table[index].value();
        index += 1;
    }
    mask
}
