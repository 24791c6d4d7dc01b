//! The runtime services report.
//!
//! A report is produced in a fixed order: banner, revision (or a note about
//! it), the raw mask, then one line per supported service. Output that was
//! already written stays written when a later step fails.

use std::io::{self, Write};

use decode::{Revision, decode, undefined_bits};
use logging::targets;
use platform::{EfiTestError, RuntimeQuery};
use tracing::{debug, info};

use crate::defaults::{BANNER, PROGRAM_NAME};
use crate::exit_code::ExitCode;

/// Prints the banner, opens the device with `open` and reports on it.
///
/// The device is dropped before this function returns, on success and on
/// failure alike.
pub fn execute_with<Q, F, Out, Err>(open: F, stdout: &mut Out, stderr: &mut Err) -> ExitCode
where
    Q: RuntimeQuery,
    F: FnOnce() -> Result<Q, EfiTestError>,
    Out: Write,
    Err: Write,
{
    if let Err(error) = writeln!(stdout, "{BANNER}") {
        return write_error(&error, stderr);
    }

    let device = match open() {
        Ok(device) => device,
        Err(error) => {
            debug!(target: targets::DEVICE, %error, "open failed");
            return match write_failure(&error, stdout, stderr) {
                Ok(()) => ExitCode::Failure,
                Err(error) => write_error(&error, stderr),
            };
        }
    };
    info!(target: targets::DEVICE, "device opened");

    let status = report(&device, stdout, stderr);
    drop(device);
    info!(target: targets::DEVICE, status = status.as_i32(), "device released");
    status
}

/// Queries the revision and the supported mask and prints both.
///
/// Revision failures are reported and skipped; mask failures end the report
/// with [`ExitCode::Failure`].
pub fn report<Q, Out, Err>(query: &Q, stdout: &mut Out, stderr: &mut Err) -> ExitCode
where
    Q: RuntimeQuery + ?Sized,
    Out: Write,
    Err: Write,
{
    match write_report(query, stdout, stderr) {
        Ok(status) => status,
        Err(error) => write_error(&error, stderr),
    }
}

fn write_report<Q, Out, Err>(query: &Q, stdout: &mut Out, stderr: &mut Err) -> io::Result<ExitCode>
where
    Q: RuntimeQuery + ?Sized,
    Out: Write,
    Err: Write,
{
    match query.revision() {
        Ok(raw) => {
            let revision = Revision::new(raw);
            debug!(target: targets::QUERY, raw = %format!("{raw:#010x}"), %revision, "revision");
            writeln!(stdout, "UEFI {revision}")?;
        }
        Err(error) => {
            debug!(target: targets::QUERY, %error, "revision query failed");
            write_failure(&error, stdout, stderr)?;
        }
    }

    let mask = match query.supported_mask() {
        Ok(mask) => mask,
        Err(error) => {
            debug!(target: targets::QUERY, %error, "supported mask query failed");
            write_failure(&error, stdout, stderr)?;
            return Ok(ExitCode::Failure);
        }
    };
    debug!(target: targets::QUERY, mask = %format!("{mask:#010x}"), "supported mask");

    writeln!(stdout, "RuntimeServicesSupported = {mask:#010x}")?;

    let undefined = undefined_bits(mask);
    if undefined != 0 {
        debug!(
            target: targets::DECODE,
            undefined = %format!("{undefined:#010x}"),
            "ignoring bits without a runtime service"
        );
    }
    for line in decode(mask) {
        writeln!(stdout, "{line}")?;
    }
    stdout.flush()?;

    Ok(ExitCode::Ok)
}

/// Unimplemented queries are a note in the report; anything else is a diagnostic.
fn write_failure<Out, Err>(error: &EfiTestError, stdout: &mut Out, stderr: &mut Err) -> io::Result<()>
where
    Out: Write,
    Err: Write,
{
    if error.is_unimplemented() {
        return writeln!(stdout, "{error}");
    }
    writeln!(stderr, "{PROGRAM_NAME}: {error}")?;
    if let Some(guidance) = error.guidance() {
        writeln!(stderr, "{guidance}")?;
    }
    Ok(())
}

fn write_error<Err: Write>(error: &io::Error, stderr: &mut Err) -> ExitCode {
    let _ = writeln!(stderr, "{PROGRAM_NAME}: error writing report: {error}");
    ExitCode::Failure
}
