//! Ignore rules loaded from the `.gitignore` at the traversal root.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// The ignore rule set for a walk, built once at startup.
///
/// [`IgnoreRules::Absent`] means no rule file was found and every path is
/// included. Pattern semantics (globbing, negation, directory anchoring) are
/// the `ignore` crate's gitignore matching.
#[derive(Debug)]
pub enum IgnoreRules {
    Absent,
    Rules(Gitignore),
}

impl IgnoreRules {
    /// Loads `<root>/.gitignore` if present.
    ///
    /// Lines are fed to the matcher verbatim. A read failure partway through
    /// keeps the rules parsed so far; a missing or unbuildable rule file
    /// yields [`IgnoreRules::Absent`]. Never fatal.
    pub fn load(root: &Path) -> Self {
        let path = root.join(".gitignore");
        let file = match File::open(&path) {
            Ok(f) => f,
            Err(_) => return IgnoreRules::Absent,
        };
        let mut builder = GitignoreBuilder::new(root);
        for line in BufReader::new(file).lines() {
            let Ok(line) = line else { break };
            let _ = builder.add_line(None, &line);
        }
        match builder.build() {
            Ok(rules) => IgnoreRules::Rules(rules),
            Err(_) => IgnoreRules::Absent,
        }
    }

    /// Whether `rel_path` (a file path relative to the root) is excluded.
    ///
    /// A file under an ignored directory is excluded too, unless a negation
    /// pattern re-includes it.
    pub fn is_ignored(&self, rel_path: &Path) -> bool {
        match self {
            IgnoreRules::Absent => false,
            IgnoreRules::Rules(rules) => {
                rules.matched_path_or_any_parents(rel_path, false).is_ignore()
            }
        }
    }
}
