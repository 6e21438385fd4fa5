use std::path::PathBuf;

/// A single filesystem node visited during the walk.
#[derive(Debug, Clone)]
pub struct TraversalEntry {
    /// The full path to the entry.
    pub path: PathBuf,
    /// The path relative to the traversal root.
    ///
    /// Empty if the relative path could not be computed.
    pub rel_path: PathBuf,
    /// Whether the entry is a directory.
    pub is_dir: bool,
}
