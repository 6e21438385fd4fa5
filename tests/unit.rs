use std::fs;
use tempfile::tempdir;
use treecat::{DEFAULT_SNIFF_LEN, is_text, is_text_file};
#[test]
fn test_nul_byte_is_binary() {
    assert!(!is_text(b"hello\x00world"));
    assert!(!is_text(b"\x00"));
    let mut mostly_text = vec![b'a'; 100];
    mostly_text.push(0);
    assert!(!is_text(&mostly_text));
}
#[test]
fn test_empty_is_text() {
    assert!(is_text(b""));
}
#[test]
fn test_printable_ascii_is_text() {
    assert!(is_text(b"plain ascii with\ttabs,\nnewlines\r\nand punctuation!?"));
}
#[test]
fn test_utf8_multibyte_is_text() {
    assert!(is_text("héllo wörld — ünïcode ✓".as_bytes()));
}
#[test]
fn test_nonprintable_ratio_boundary() {
    // 1 control unit out of 10 is exactly 10%, which is binary.
    let mut at_boundary = vec![b'a'; 9];
    at_boundary.push(0x01);
    assert!(!is_text(&at_boundary));
    // 1 out of 20 is 5%, which is text.
    let mut below = vec![b'a'; 19];
    below.push(0x01);
    assert!(is_text(&below));
}
#[test]
fn test_invalid_utf8_counts_as_nonprintable() {
    // A lone invalid byte is 100% non-printable.
    assert!(!is_text(b"\xff"));
    // One invalid byte diluted by enough ASCII stays text.
    let mut diluted = vec![b'a'; 30];
    diluted.push(0xff);
    assert!(is_text(&diluted));
}
#[test]
fn test_allowed_controls_only() {
    assert!(is_text(b"\t\n\r\t\n\r"));
}
#[test]
fn test_unopenable_file_is_not_text() {
    let dir = tempdir().unwrap();
    assert!(!is_text_file(&dir.path().join("does-not-exist"), DEFAULT_SNIFF_LEN));
}
#[test]
fn test_sniff_window_bounds_detection() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("late-nul.dat");
    let mut content = vec![b'a'; 64];
    content.push(0);
    fs::write(&path, &content).unwrap();
    // The NUL sits past a 64-byte window, so the sample looks like text.
    assert!(is_text_file(&path, 64));
    assert!(!is_text_file(&path, DEFAULT_SNIFF_LEN));
}
