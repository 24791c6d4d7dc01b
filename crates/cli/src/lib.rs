#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the command-line front-end of `rtmask`. It opens the
//! Linux `efi_test` device, asks the driver for the UEFI system table
//! revision and for the firmware's `RuntimeServicesSupported` mask, and
//! prints both in the layout below:
//!
//! ```text
//! EFI runtime information as provided by Linux
//! UEFI 2.8
//! RuntimeServicesSupported = 0x000005b0
//! = EFI_RT_SUPPORTED_GET_VARIABLE
//! | EFI_RT_SUPPORTED_GET_NEXT_VARIABLE_NAME
//! | EFI_RT_SUPPORTED_SET_VIRTUAL_ADDRESS_MAP
//! | EFI_RT_SUPPORTED_CONVERT_POINTER
//! | EFI_RT_SUPPORTED_RESET_SYSTEM
//! ```
//!
//! # Design
//!
//! [`run`] parses the arguments with a [`clap`](https://docs.rs/clap/)
//! command definition, installs the stderr tracing subscriber and hands a
//! device opener to [`execute_with`]. The opener is a closure so the whole
//! sequence can be driven by a mock [`platform::RuntimeQuery`] in tests.
//!
//! # Invariants
//!
//! - `run` never panics; I/O failures surface as exit code `1`.
//! - A missing revision never changes the exit code. A missing mask always
//!   yields `1`.
//! - Queries are issued once each, revision first. Nothing is retried.
//!
//! # Examples
//!
//! ```
//! use cli::run;
//!
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = run(["rtmask", "--version"], &mut stdout, &mut stderr);
//!
//! assert_eq!(exit_code, 0);
//! assert!(!stdout.is_empty());
//! assert!(stderr.is_empty());
//! ```

mod defaults;
mod exit_code;
mod report;

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, builder::PathBufValueParser};
use logging::{VerbosityConfig, init_tracing};
use platform::{EFI_TEST_DEVICE, EfiTestDevice};

pub use defaults::{BANNER, PROGRAM_NAME};
pub use exit_code::ExitCode;
pub use report::{execute_with, report};

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

#[derive(Debug, Default, PartialEq, Eq)]
struct ParsedArgs {
    show_help: bool,
    show_version: bool,
    verbose: u8,
    device: Option<PathBuf>,
}

/// Builds the `clap` command used for parsing.
fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Show this help message and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .help("Output version information and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Print diagnostics to standard error; repeat for more.")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("device")
                .long("device")
                .value_name("PATH")
                .help("Query PATH instead of /dev/efi_test.")
                .action(ArgAction::Set)
                .value_parser(PathBufValueParser::new()),
        )
}

/// Parses command-line arguments into a [`ParsedArgs`] structure.
fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();

    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    Ok(ParsedArgs {
        show_help: matches.get_flag("help"),
        show_version: matches.get_flag("version"),
        verbose: matches.get_count("verbose"),
        device: matches.remove_one::<PathBuf>("device"),
    })
}

/// Runs the CLI using the provided argument iterator and output handles.
///
/// The function returns the process exit code that should be used by the
/// caller: `0` once the mask has been printed, `1` otherwise.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    match parse_args(arguments) {
        Ok(parsed) => execute(parsed, stdout, stderr).as_i32(),
        Err(error) => {
            let _ = write!(stderr, "{PROGRAM_NAME}: {error}");
            ExitCode::Failure.as_i32()
        }
    }
}

fn execute<Out, Err>(parsed: ParsedArgs, stdout: &mut Out, stderr: &mut Err) -> ExitCode
where
    Out: Write,
    Err: Write,
{
    let ParsedArgs {
        show_help,
        show_version,
        verbose,
        device,
    } = parsed;

    if show_help {
        return write_static(defaults::HELP_TEXT, stdout);
    }
    if show_version {
        let version = format!("{PROGRAM_NAME} {}\n", env!("CARGO_PKG_VERSION"));
        return write_static(&version, stdout);
    }

    init_tracing(VerbosityConfig::from_verbose_level(verbose));

    let path = device.unwrap_or_else(|| PathBuf::from(EFI_TEST_DEVICE));
    execute_with(|| EfiTestDevice::open_at(&path), stdout, stderr)
}

fn write_static<Out: Write>(text: &str, stdout: &mut Out) -> ExitCode {
    match stdout.write_all(text.as_bytes()) {
        Ok(()) => ExitCode::Ok,
        Err(_) => ExitCode::Failure,
    }
}

/// Converts a numeric exit code into a [`std::process::ExitCode`].
///
/// Values outside `0..=255` are clamped into the representable range.
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(clamped as u8)
}
