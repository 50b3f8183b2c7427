// Target deletion module
// Best-effort recursive removal with per-entry failure isolation

use std::fs;
use std::path::Path;

use super::stats::Stats;

/// Recursively remove a target directory tree, best effort
///
/// Every error during removal (permissions, file in use, vanished
/// mid-operation) is swallowed at the level of the failing entry and removal
/// continues; a cleanup batch must never abort over one locked file. No
/// retries. A target that no longer exists yields empty stats and is not an
/// error.
///
/// Returns what was actually removed. Symlinks are removed as entries, never
/// followed into.
pub fn delete_tree(path: &Path) -> Stats {
    let mut stats = Stats::new();
    remove_recursive(path, &mut stats);
    stats
}

fn remove_recursive(path: &Path, stats: &mut Stats) {
    let Ok(entries) = fs::read_dir(path) else {
        return;
    };

    for entry in entries.flatten() {
        let child = entry.path();
        match entry.file_type() {
            Ok(file_type) if file_type.is_dir() => remove_recursive(&child, stats),
            Ok(_) => {
                let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
                if fs::remove_file(&child).is_ok() {
                    stats.add_file(size);
                }
            }
            Err(_) => {
                let _ = fs::remove_file(&child);
            }
        }
    }

    if fs::remove_dir(path).is_ok() {
        stats.add_directory();
    }
}
