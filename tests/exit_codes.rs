//! Exit code integration tests.
//!
//! | Code | Meaning                                                       |
//! |------|---------------------------------------------------------------|
//! |  0   | RuntimeServicesSupported was read and decoded                  |
//! |  1   | Usage error, device missing or unopenable, mask query failed   |
//!
//! A missing revision never changes the exit code on its own.

#![cfg(target_os = "linux")]

use assert_cmd::Command;
use predicates::prelude::*;

const BANNER: &str = "EFI runtime information as provided by Linux\n";

fn rtmask_with_device(path: &std::path::Path) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_rtmask"));
    command.arg("--device").arg(path);
    command
}

// ============================================================================
// Exit Code 1: device missing
// ============================================================================

#[test]
fn missing_device_prints_kernel_guidance() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("efi_test");

    rtmask_with_device(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::diff(BANNER))
        .stderr(predicate::str::contains("open "))
        .stderr(predicate::str::contains("Kernel must be compiled with CONFIG_EFI_TEST"));
}

#[test]
fn unopenable_device_reports_the_os_error_without_guidance() {
    let dir = tempfile::tempdir().expect("tempdir");

    rtmask_with_device(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::diff(BANNER))
        .stderr(predicate::str::starts_with("rtmask: open "))
        .stderr(predicate::str::contains("CONFIG_EFI_TEST").not());
}

// ============================================================================
// Exit Code 1: queries not implemented
// ============================================================================

/// A regular file answers every ioctl with `ENOTTY`, like a kernel whose
/// efi_test driver predates both queries.
#[test]
fn driver_without_queries_reports_both_ioctls() {
    let file = tempfile::NamedTempFile::new().expect("tempfile");

    rtmask_with_device(file.path())
        .assert()
        .code(1)
        .stdout(
            predicate::str::starts_with(BANNER)
                .and(predicate::str::contains(
                    "The IOCTL EFI_RUNTIME_GET_REVISION (",
                ))
                .and(predicate::str::contains(
                    "The IOCTL EFI_RUNTIME_GET_SUPPORTED_MASK (",
                ))
                .and(predicate::str::contains("RuntimeServicesSupported").not()),
        )
        .stderr(predicate::str::is_empty());
}

// ============================================================================
// Diagnostics stay on stderr
// ============================================================================

#[test]
fn verbose_diagnostics_do_not_touch_stdout() {
    let file = tempfile::NamedTempFile::new().expect("tempfile");

    rtmask_with_device(file.path())
        .arg("-vv")
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with(BANNER))
        .stdout(predicate::str::contains("DEBUG").not())
        .stderr(predicate::str::contains("device opened"));
}
