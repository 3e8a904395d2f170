/// Check module: decides whether an input path exists and reports it.
///
/// [`check_path`] is the pure half: it touches the filesystem once and
/// returns either a [`CheckedPath`] or a [`CheckError`]. [`process_file`]
/// adds the reporting: one line on stdout for success, one line on stderr
/// for failure, and the matching [`ExitStatus`].
pub mod report;

use crate::error::CheckError;
use crate::status::ExitStatus;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A path that was confirmed to exist at check time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedPath {
    path: PathBuf,
    is_dir: bool,
}

impl CheckedPath {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `true` if the path resolved to a directory rather than a file.
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }
}

/// Check whether `input` exists on the filesystem.
///
/// Symlinks are followed, so a dangling link is reported as not found.
/// Only a permission failure is treated as "could not be checked"; every
/// other lookup error (not a directory, symlink loop, ...) means the path
/// does not resolve and is reported as not found.
///
/// An empty input names the current directory. The returned path (and any
/// error) still carries `input` exactly as given.
pub fn check_path(input: &Path) -> Result<CheckedPath, CheckError> {
    debug!("Checking {}", input.display());

    let lookup = if input.as_os_str().is_empty() {
        Path::new(".")
    } else {
        input
    };

    match std::fs::metadata(lookup) {
        Ok(meta) => Ok(CheckedPath {
            path: input.to_path_buf(),
            is_dir: meta.is_dir(),
        }),
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            debug!("Cannot check {}: {e}", input.display());
            Err(CheckError::Inaccessible {
                path: input.to_path_buf(),
                source: e,
            })
        }
        Err(e) => {
            debug!("{} does not resolve: {e}", input.display());
            Err(CheckError::NotFound {
                path: input.to_path_buf(),
            })
        }
    }
}

/// Check `input` and report the outcome.
///
/// Writes `Processing file: <input>` to `out` when the path exists and
/// `Error: ...` to `err` otherwise. The returned `io::Error` is only for
/// failures writing to the sinks themselves.
pub fn process_file<O, E>(input: &Path, out: &mut O, err: &mut E) -> io::Result<ExitStatus>
where
    O: Write,
    E: Write,
{
    match check_path(input) {
        Ok(checked) => {
            debug!(
                "{} exists ({})",
                checked.path().display(),
                if checked.is_dir() { "directory" } else { "file" }
            );
            report::write_processing(out, checked.path())?;
            Ok(ExitStatus::Success)
        }
        Err(e) => {
            debug!("Check failed for {}", e.path().display());
            report::write_error(err, &e)?;
            Ok(ExitStatus::Failure)
        }
    }
}
