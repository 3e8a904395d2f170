//! filecheck: report whether a single input path exists.
//!
//! Thin binary entry point. Argument validation lives in [`cli`]; the
//! existence check lives in the `filecheck-core` crate.

mod cli;

use std::io;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Diagnostics go to stderr so stdout carries only the status line.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    tracing::debug!("filecheck starting");

    let stdout = io::stdout();
    let stderr = io::stderr();
    match cli::run(std::env::args_os(), &mut stdout.lock(), &mut stderr.lock()) {
        Ok(status) => {
            tracing::debug!("filecheck finished, success: {}", status.is_success());
            status.into()
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            filecheck_core::ExitStatus::Failure.into()
        }
    }
}
