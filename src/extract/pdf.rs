use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to extract text from {path}: {source}")]
    Pdf {
        path: PathBuf,
        #[source]
        source: pdf_extract::OutputError,
    },
}

/// Extract the plain text of every page of a PDF.
///
/// An unreadable or corrupt source is a hard failure surfaced before the
/// compression pipeline runs; it is never retried here. A well-formed PDF
/// with no extractable text (scanned pages, pure images) yields an empty
/// string, which is not an error.
pub fn pdf_text(path: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|source| ExtractError::Pdf {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), chars = text.len(), "extracted text");
    Ok(text)
}
