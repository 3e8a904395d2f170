//! Command-line entry routine.
//!
//! Validates that exactly one input path was supplied and hands it to
//! [`filecheck_core::process_file`]. Every other shape of invocation is a
//! usage error with status 1.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use filecheck_core::ExitStatus;
use tracing::debug;

/// Program name used in the usage line when `argv[0]` is unusable.
pub const DEFAULT_PROGRAM_NAME: &str = "filecheck";

#[derive(Parser, Debug)]
#[command(
    name = "filecheck",
    about = "Check that an input file exists",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Path to check.
    #[arg(
        value_name = "INPUT_FILE",
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(OsString)
    )]
    input_file: OsString,
}

/// Run one invocation against the given argument vector (including
/// `argv[0]`), writing status lines to `out` and `err`.
pub fn run<I, T, O, E>(args: I, out: &mut O, err: &mut E) -> anyhow::Result<ExitStatus>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    O: Write,
    E: Write,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let program = program_name(args.first().map(OsString::as_os_str));

    // Count before parsing: clap would swallow a literal `--`.
    if args.len() != 2 {
        debug!("Rejected {} argument(s)", args.len().saturating_sub(1));
        return write_usage(err, &program);
    }

    // The escape makes clap read the single argument as a value, even `--`.
    let escaped = [args[0].clone(), OsString::from("--"), args[1].clone()];
    let cli = match Cli::try_parse_from(escaped) {
        Ok(cli) => cli,
        Err(e) => {
            debug!("Rejected arguments: {:?}", e.kind());
            return write_usage(err, &program);
        }
    };

    let input = PathBuf::from(cli.input_file);
    filecheck_core::process_file(&input, out, err)
        .with_context(|| format!("failed to report on {}", input.display()))
}

fn write_usage<E: Write>(err: &mut E, program: &str) -> anyhow::Result<ExitStatus> {
    writeln!(err, "Usage: {program} <input_file>").context("failed to write usage message")?;
    Ok(ExitStatus::Failure)
}

/// File name component of `argv[0]`, or [`DEFAULT_PROGRAM_NAME`].
fn program_name(argv0: Option<&std::ffi::OsStr>) -> String {
    argv0
        .and_then(|a| Path::new(a).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string())
}
