/// filecheck core: path existence checks and status reporting.
///
/// This crate contains all of the checking logic with zero CLI dependencies.
/// Argument parsing lives in the `filecheck` binary.
///
/// # Modules
///
/// - [`check`]: Existence check for a single input path and its status lines.
/// - [`error`]: Failure conditions reported by the check.
/// - [`status`]: Process exit status returned to the caller.
pub mod check;
pub mod error;
pub mod status;

pub use check::{check_path, process_file, CheckedPath};
pub use error::CheckError;
pub use status::ExitStatus;
