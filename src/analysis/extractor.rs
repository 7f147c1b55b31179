// src/analysis/extractor.rs
//! PDF text extraction and failure classification
//!
//! Extraction failures are terminal for the pipeline: with no textual signal
//! from the document there is nothing to synthesize a fallback from, so both
//! variants surface as 400-class rejections.

use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    /// Structural extraction failed (corrupted file, unsupported encoding)
    #[error("Could not extract text from PDF. Please ensure it's a valid text-based PDF.")]
    Corrupt,

    /// Extraction succeeded but produced no text (image-only scan)
    #[error("Could not extract text from PDF. The file might be image-based or corrupted.")]
    NoText,
}

/// Extract plain text from PDF bytes.
///
/// pdf-extract is CPU-bound, so the work runs on the blocking pool. A panic
/// inside the extractor surfaces as a join error and is classified the same
/// as any other structural failure.
pub async fn extract_text(pdf_bytes: Vec<u8>) -> Result<String, ExtractionError> {
    let extracted = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem(&pdf_bytes).map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| {
        warn!(error = %e, "PDF extraction task panicked");
        ExtractionError::Corrupt
    })?
    .map_err(|e| {
        warn!(error = %e, "Failed to extract text from PDF");
        ExtractionError::Corrupt
    })?;

    classify_extracted(extracted)
}

/// Reject extraction output that carries no usable text
pub fn classify_extracted(text: String) -> Result<String, ExtractionError> {
    if text.trim().is_empty() {
        return Err(ExtractionError::NoText);
    }
    Ok(text)
}
