use crate::classify::is_text_file;
use crate::error::TreecatError;
use crate::options::TreecatOptions;
use crate::output::write_record;
use crate::rules::IgnoreRules;
use crate::types::TraversalEntry;
use ignore::WalkBuilder;
use std::io::Write;
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;

/// Lazy depth-first, pre-order iterator over a directory tree.
///
/// All of the `ignore` crate's built-in filtering is disabled; hidden files
/// are visited and gitignore matching is left to the caller. The single
/// hardcoded prune is that directories named `.git` are never descended into.
/// Entries within a directory are yielded in file-name order.
pub struct Walker {
    root: PathBuf,
    inner: ignore::Walk,
}

impl Walker {
    pub fn new(options: &TreecatOptions) -> Self {
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(|entry| {
                !(entry.file_type().is_some_and(|t| t.is_dir()) && entry.file_name() == ".git")
            });
        Self {
            root: options.root.clone(),
            inner: builder.build(),
        }
    }
}

impl Iterator for Walker {
    type Item = Result<TraversalEntry, ignore::Error>;
    fn next(&mut self) -> Option<Self::Item> {
        let result = self.inner.next()?;
        Some(result.map(|entry| {
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            let path = entry.into_path();
            let rel_path = path
                .strip_prefix(&self.root)
                .map(Path::to_path_buf)
                .unwrap_or_default();
            TraversalEntry {
                path,
                rel_path,
                is_dir,
            }
        }))
    }
}

/// Walks `options.root` and writes one record per text file to `out`.
///
/// A record is a `==<relative-path>==` header line, the raw bytes of the
/// file, and a trailing newline. Files matched by the root `.gitignore` and
/// files detected as binary produce no record. Entries that cannot be
/// accessed are reported on `err` as `Error accessing <path>: <cause>` and
/// the walk continues; no per-file failure is fatal. The only error returned
/// is a write failure on `out` itself.
pub fn treecat<W: Write, E: Write>(
    options: &TreecatOptions,
    out: &mut W,
    err: &mut E,
) -> Result<(), TreecatError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Starting treecat with root: {}", options.root.display());
    let rules = IgnoreRules::load(&options.root);
    for item in Walker::new(options) {
        let entry = match item {
            Ok(entry) => entry,
            Err(e) => {
                report_access_error(err, &options.root, &e);
                continue;
            }
        };
        if entry.is_dir {
            continue;
        }
        if rules.is_ignored(&entry.rel_path) {
            continue;
        }
        if !is_text_file(&entry.path, options.sniff_len) {
            continue;
        }
        write_record(out, err, &entry)?;
    }
    Ok(())
}

fn report_access_error<E: Write>(err: &mut E, root: &Path, error: &ignore::Error) {
    let (path, cause) = unwrap_error(error);
    let path = path.unwrap_or(root);
    // Diagnostics are best effort.
    let _ = writeln!(err, "Error accessing {}: {}", path.display(), cause);
}

// Walk errors arrive wrapped in path and depth context; pull out the path and
// the innermost cause.
fn unwrap_error(error: &ignore::Error) -> (Option<&Path>, &ignore::Error) {
    match error {
        ignore::Error::WithPath { path, err } => (Some(path), unwrap_error(err).1),
        ignore::Error::WithDepth { err, .. } => unwrap_error(err),
        other => (None, other),
    }
}
