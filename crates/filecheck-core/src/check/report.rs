/// Status lines written for a completed check.
///
/// Kept separate from the check itself so the exact wording can be
/// asserted without touching the filesystem.
use crate::error::CheckError;

use std::io::{self, Write};
use std::path::Path;

/// Confirmation line for a path that exists.
pub fn write_processing<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    writeln!(out, "Processing file: {}", path.display())
}

/// Error line for a failed check.
pub fn write_error<W: Write>(err: &mut W, error: &CheckError) -> io::Result<()> {
    writeln!(err, "Error: {error}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_processing_line() {
        let mut buf = Vec::new();
        write_processing(&mut buf, Path::new("data/input.csv")).unwrap();
        assert_eq!(buf, b"Processing file: data/input.csv\n");
    }

    #[test]
    fn test_error_line() {
        let mut buf = Vec::new();
        let e = CheckError::NotFound {
            path: PathBuf::from("missing.txt"),
        };
        write_error(&mut buf, &e).unwrap();
        assert_eq!(buf, b"Error: File 'missing.txt' not found\n");
    }
}
