use std::io::Write;

use pdf_condense::extract::{pdf_text, ExtractError};
use tempfile::tempdir;

#[test]
fn missing_file_surfaces_an_io_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does-not-exist.pdf");

    let err = pdf_text(&missing).unwrap_err();
    assert!(matches!(err, ExtractError::Io { .. }), "got: {err}");
}

#[test]
fn corrupt_bytes_surface_a_pdf_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("corrupt.pdf");

    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(b"this is definitely not a pdf").unwrap();
    drop(file);

    let err = pdf_text(&path).unwrap_err();
    assert!(matches!(err, ExtractError::Pdf { .. }), "got: {err}");
}
