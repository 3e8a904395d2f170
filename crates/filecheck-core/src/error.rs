/// Failure conditions for a path check.
///
/// The `Display` text of each variant is the user-facing stderr line
/// without its `Error: ` prefix.
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// The path does not exist (a dangling symlink counts as missing).
    #[error("File '{}' not found", path.display())]
    NotFound { path: PathBuf },

    /// Existence could not be determined, e.g. permission denied on a parent.
    #[error("File '{}' could not be checked: {source}", path.display())]
    Inaccessible {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CheckError {
    /// The path the failed check was run against.
    pub fn path(&self) -> &std::path::Path {
        match self {
            CheckError::NotFound { path } | CheckError::Inaccessible { path, .. } => path,
        }
    }
}
