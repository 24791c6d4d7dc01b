use assert_cmd::Command;
use predicates::prelude::*;

fn rtmask() -> Command {
    Command::new(env!("CARGO_BIN_EXE_rtmask"))
}

#[test]
fn rtmask_help_lists_usage() {
    rtmask()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: rtmask"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn rtmask_version_names_the_program() {
    rtmask()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("rtmask "))
        .stderr(predicate::str::is_empty());
}

#[test]
fn rtmask_rejects_unknown_flag() {
    rtmask()
        .arg("--definitely-not-a-flag")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--definitely-not-a-flag"));
}

#[test]
fn rtmask_rejects_operands() {
    rtmask()
        .arg("/dev/efi_test")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn rtmask_always_starts_with_the_banner() {
    // The host may or may not have /dev/efi_test; the first line is fixed either way.
    let output = rtmask().output().expect("run rtmask");
    let code = output.status.code().expect("exit code");
    assert!(code == 0 || code == 1, "unexpected exit code {code}");
    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    assert!(stdout.starts_with("EFI runtime information as provided by Linux\n"));
}
