// Directory scanning module
// Handles the recursive search for target folders under a root

use std::fs;
use std::path::{Path, PathBuf};

use super::patterns::TargetMatcher;

/// Engine for locating target directories under a root
///
/// The scan never descends into a matched directory: targets are leaves of
/// interest (their contents may be enormous dependency caches) and their
/// internals are irrelevant. As a consequence the returned hits are disjoint
/// by construction - a target nested inside another target is never reported
/// separately.
pub struct Scanner {
    matcher: TargetMatcher,
}

impl Scanner {
    /// Create a new Scanner with the given target matcher
    pub fn new(matcher: TargetMatcher) -> Self {
        Self { matcher }
    }

    /// Scan a directory tree and return the full paths of all target hits
    ///
    /// The caller guarantees that `root` exists and is a directory. Hits are
    /// returned in stack order, not necessarily lexical order. Directories
    /// that cannot be listed (permissions, removed mid-scan) are silently
    /// skipped and traversal continues with their siblings.
    ///
    /// Symlinked directories are handled however the platform directory
    /// listing reports them; no cycle detection is performed, so a
    /// self-referential symlink can loop the scan. Known limitation.
    pub fn scan(&self, root: &Path) -> Vec<PathBuf> {
        let mut stack = vec![root.to_path_buf()];
        let mut hits = Vec::new();

        while let Some(dir) = stack.pop() {
            let Ok(entries) = fs::read_dir(&dir) else {
                continue;
            };

            for entry in entries.flatten() {
                let Ok(file_type) = entry.file_type() else {
                    continue;
                };
                if !file_type.is_dir() {
                    continue;
                }

                let name = entry.file_name();
                let path = entry.path();
                if self.matcher.is_target(&name.to_string_lossy()) {
                    hits.push(path);
                } else {
                    stack.push(path);
                }
            }
        }

        hits
    }
}
