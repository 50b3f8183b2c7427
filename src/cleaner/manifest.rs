// Ignore manifest module
// Loads, deduplicates and appends entries to the root's .gitignore

use std::collections::HashSet;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::error::SweepError;

/// Filename of the ignore manifest inside the scan root
pub const MANIFEST_FILENAME: &str = ".gitignore";

/// Build the manifest entry for a target path
///
/// Entries are relative to the root, forward-slash separated on every
/// platform, and carry exactly one trailing slash.
pub fn manifest_entry(root: &Path, target: &Path) -> String {
    let relative = target.strip_prefix(root).unwrap_or(target);
    let mut entry = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/");
    entry.push('/');
    entry
}

/// Open ignore manifest for one sweep run
///
/// Holds the append-mode file handle for the duration of the run; the handle
/// is released when the value is dropped, on normal and error exits alike.
/// Existing entries are loaded up front and matched as a set, so re-running
/// against the same root never produces duplicate lines.
pub struct Manifest {
    path: PathBuf,
    file: File,
    entries: HashSet<String>,
}

impl Manifest {
    /// Load existing entries and open the manifest for appending
    ///
    /// An absent manifest file is not an error; it is created on open.
    pub fn open(root: &Path) -> Result<Self, SweepError> {
        let path = root.join(MANIFEST_FILENAME);

        let entries = match fs::read_to_string(&path) {
            Ok(content) => content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => HashSet::new(),
            Err(e) => {
                return Err(SweepError::ManifestIo {
                    path,
                    operation: "reading".to_string(),
                    source: e,
                })
            }
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| SweepError::ManifestIo {
                path: path.clone(),
                operation: "opening".to_string(),
                source: e,
            })?;

        Ok(Self {
            path,
            file,
            entries,
        })
    }

    /// Append an entry unless it is already present
    ///
    /// Returns `true` when the entry was written. Writes are flushed
    /// immediately so partial progress survives an interruption. Write
    /// failures are fatal: losing manifest lines silently would be worse
    /// than stopping the run.
    pub fn append(&mut self, entry: &str) -> Result<bool, SweepError> {
        if self.entries.contains(entry) {
            return Ok(false);
        }

        writeln!(self.file, "{}", entry).map_err(|e| SweepError::ManifestIo {
            path: self.path.clone(),
            operation: "appending to".to_string(),
            source: e,
        })?;
        self.file.flush().map_err(|e| SweepError::ManifestIo {
            path: self.path.clone(),
            operation: "flushing".to_string(),
            source: e,
        })?;

        self.entries.insert(entry.to_string());
        Ok(true)
    }

    /// Check whether an entry is already recorded
    pub fn contains(&self, entry: &str) -> bool {
        self.entries.contains(entry)
    }

    /// Number of known entries, pre-existing and appended alike
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
