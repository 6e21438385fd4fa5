//! Text/binary classification from a bounded content sample.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
#[cfg(feature = "logging")]
use tracing;

/// Number of bytes sampled from the start of a file for detection.
pub const DEFAULT_SNIFF_LEN: usize = 8000;

/// Determines whether the file at `path` is text by sampling its first
/// `sniff_len` bytes.
///
/// A file that cannot be opened or read is reported as not text; unreadable
/// files are excluded from output rather than failing the run. A short read
/// (including an empty file) is not an error.
pub fn is_text_file(path: &Path, sniff_len: usize) -> bool {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return false,
    };
    let mut reader = BufReader::new(file);
    let mut sample = Vec::with_capacity(sniff_len);
    match reader.by_ref().take(sniff_len as u64).read_to_end(&mut sample) {
        Ok(_) => {
            let text = is_text(&sample);
            #[cfg(feature = "logging")]
            if !text {
                tracing::debug!("Binary file detected: {}", path.display());
            }
            text
        }
        Err(_) => false,
    }
}

/// Returns true if the data is likely text.
///
/// An empty sample is text. Any NUL byte means binary. Otherwise the sample is
/// decoded as UTF-8: scalar values below 32 other than tab, line feed and
/// carriage return count as non-printable, and each undecodable byte counts as
/// one non-printable unit. The sample is binary when non-printable units make
/// up 10% or more of all decoded units.
///
/// This is a heuristic; short or unusually encoded files can be misclassified.
pub fn is_text(data: &[u8]) -> bool {
    if data.is_empty() {
        return true;
    }
    // A NUL byte is a strong binary signal.
    if data.contains(&0) {
        return false;
    }
    let mut non_printable = 0usize;
    let mut total = 0usize;
    for chunk in data.utf8_chunks() {
        for ch in chunk.valid().chars() {
            if (ch as u32) < 32 && !matches!(ch, '\t' | '\n' | '\r') {
                non_printable += 1;
            }
            total += 1;
        }
        let invalid = chunk.invalid().len();
        non_printable += invalid;
        total += invalid;
    }
    (non_printable as f64) / (total as f64) < 0.1
}
