// Deletion statistics module
// Accumulates counts for removed directories, files and bytes

/// Statistics collected while removing target trees
#[derive(Debug, Default, Clone, Copy)]
pub struct Stats {
    directories: u64,
    files: u64,
    bytes: u64,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of directories removed
    pub fn directories(&self) -> u64 {
        self.directories
    }

    /// Number of files removed
    pub fn files(&self) -> u64 {
        self.files
    }

    /// Total bytes reclaimed
    pub fn bytes(&self) -> u64 {
        self.bytes
    }

    pub fn add_directory(&mut self) {
        self.directories += 1;
    }

    pub fn add_file(&mut self, bytes: u64) {
        self.files += 1;
        self.bytes += bytes;
    }

    /// Fold another accumulator into this one
    pub fn merge(&mut self, other: Stats) {
        self.directories += other.directories;
        self.files += other.files;
        self.bytes += other.bytes;
    }
}
