//! Record emission: header line plus raw file content.
//!
//! Content is re-opened and streamed from disk rather than reusing the
//! classification sample, so the record always carries the complete bytes.

use crate::error::TreecatError;
use crate::types::TraversalEntry;
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::Path;

/// Writes one record for `entry`: `==<rel_path>==`, the file bytes verbatim,
/// and a trailing newline.
///
/// If the file cannot be reopened, an inline error marker stands in for the
/// content. A read failure mid-stream is reported on `err` and ends the
/// record early. Only a write failure on `out` is returned.
pub(crate) fn write_record<W: Write, E: Write>(
    out: &mut W,
    err: &mut E,
    entry: &TraversalEntry,
) -> Result<(), TreecatError> {
    writeln!(out, "=={}==", entry.rel_path.display()).map_err(TreecatError::Output)?;
    match File::open(&entry.path) {
        Ok(file) => stream_content(&entry.path, BufReader::new(file), out, err)?,
        Err(e) => {
            writeln!(out, "  [error opening file: {}]", e).map_err(TreecatError::Output)?;
        }
    }
    writeln!(out).map_err(TreecatError::Output)?;
    Ok(())
}

fn stream_content<W: Write, E: Write>(
    path: &Path,
    mut reader: impl Read,
    out: &mut W,
    err: &mut E,
) -> Result<(), TreecatError> {
    let mut buf = [0u8; 8192];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => return Ok(()),
            Ok(n) => out.write_all(&buf[..n]).map_err(TreecatError::Output)?,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                let _ = writeln!(err, "Error accessing {}: {}", path.display(), e);
                return Ok(());
            }
        }
    }
}
