// Target name matching module
// Decides whether a directory basename denotes a cleanup target

use std::collections::HashSet;

/// Matcher for cleanup-target directory names
///
/// Matching is exact and case-sensitive on the directory's base name only,
/// never on its full path. No glob or substring matching is performed.
#[derive(Debug, Clone)]
pub struct TargetMatcher {
    names: HashSet<String>,
}

impl TargetMatcher {
    /// Create a matcher from an explicit set of directory names
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether a directory basename is a cleanup target
    pub fn is_target(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of names in the target set
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
