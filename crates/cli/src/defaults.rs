//! Constants shared across the CLI front-end.

/// Program name used in usage text and diagnostics.
pub const PROGRAM_NAME: &str = "rtmask";

/// First line of every report.
pub const BANNER: &str = "EFI runtime information as provided by Linux";

/// Deterministic help text describing the CLI surface.
pub(crate) const HELP_TEXT: &str = concat!(
    "rtmask ",
    env!("CARGO_PKG_VERSION"),
    "\n",
    "\n",
    "Usage: rtmask [-h] [-V] [-v]... [--device PATH]\n",
    "\n",
    "Reports the UEFI revision and the RuntimeServicesSupported mask of the\n",
    "firmware as provided by the Linux efi_test driver (CONFIG_EFI_TEST).\n",
    "The following options are recognised:\n",
    "  -h, --help         Show this help message and exit.\n",
    "  -V, --version      Output version information and exit.\n",
    "  -v, --verbose      Print diagnostics to standard error; repeat for more.\n",
    "      --device PATH  Query PATH instead of /dev/efi_test.\n",
);
