//! Text extraction for uploaded resume files.
//!
//! The scoring core only needs a plain string per document; this crate
//! owns the format-specific parsing. A failed extraction is an error
//! for that one document — callers substitute empty text (which ranks
//! at 0.0) and keep ranking the rest.

use anyhow::{Context, Result};
use std::path::Path;

/// Extract plain text from raw file bytes. Bytes starting with the
/// `%PDF` magic go through the PDF parser; anything else must be valid
/// UTF-8 and passes through unchanged.
pub fn extract_text(name: &str, data: &[u8]) -> Result<String> {
    if data.starts_with(b"%PDF") {
        let text = pdf_extract::extract_text_from_mem(data)
            .with_context(|| format!("failed to extract text from {name}"))?;
        tracing::debug!(name, chars = text.len(), "extracted pdf text");
        Ok(text)
    } else {
        let text = std::str::from_utf8(data)
            .with_context(|| format!("{name} is neither a PDF nor valid UTF-8 text"))?;
        Ok(text.to_string())
    }
}

/// Read a file and extract its text, dispatching on content like
/// [`extract_text`].
pub fn extract_from_path(path: &Path) -> Result<String> {
    let data =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("<unnamed>");
    extract_text(name, &data)
}
