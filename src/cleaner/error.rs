// Centralized error handling module
// Covers the two fatal conditions; everything per-item is absorbed locally

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Fatal errors for a sweep run
///
/// Only root validation and manifest I/O abort a run. Unreadable
/// subdirectories and failed deletions are recoverable by design and never
/// surface through this type.
#[derive(Debug)]
pub enum SweepError {
    /// Root path missing or not a directory
    InvalidRoot { path: PathBuf },
    /// Manifest file could not be read, opened, or written
    ManifestIo {
        path: PathBuf,
        operation: String,
        source: io::Error,
    },
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SweepError::InvalidRoot { path } => {
                writeln!(f, "Not a directory: {}", path.display())?;
                write!(f, "Suggestion: pass an existing directory to scan")
            }
            SweepError::ManifestIo {
                path,
                operation,
                source,
            } => {
                writeln!(
                    f,
                    "Manifest error while {} {}: {}",
                    operation,
                    path.display(),
                    source
                )?;
                write!(
                    f,
                    "Suggestion: check permissions and disk space for the ignore file"
                )
            }
        }
    }
}

impl Error for SweepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SweepError::InvalidRoot { .. } => None,
            SweepError::ManifestIo { source, .. } => Some(source),
        }
    }
}
