//! # Treecat
//!
//! `treecat` recursively walks a directory tree and prints the contents of every
//! text file to an output stream, each prefixed with a `==path==` header. Files
//! detected as binary are skipped, and a `.gitignore` at the root of the tree is
//! honored. Directories named `.git` are never descended into.
//!
//! Text detection is a content heuristic: a bounded prefix of the file is
//! sampled, NUL bytes mark a file as binary outright, and otherwise the ratio
//! of non-printable decoded units decides (see [`is_text`]).
//!
//! Per-file errors never abort the walk: inaccessible entries are reported on
//! the diagnostic stream and skipped, unreadable files are simply excluded.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use treecat::{TreecatBuilder, treecat};
//! use std::io;
//!
//! let options = TreecatBuilder::new(".").build();
//!
//! let stdout = io::stdout();
//! let stderr = io::stderr();
//! treecat(&options, &mut stdout.lock(), &mut stderr.lock())
//!     .expect("failed to write output");
//! ```

mod classify;
mod engine;
mod error;
mod options;
mod output;
mod rules;
mod types;

pub use classify::{DEFAULT_SNIFF_LEN, is_text, is_text_file};
pub use engine::{Walker, treecat};
pub use error::TreecatError;
pub use options::{TreecatBuilder, TreecatOptions};
pub use rules::IgnoreRules;
pub use types::TraversalEntry;
