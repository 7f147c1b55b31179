// src/analysis/validators.rs

use crate::common::{ValidationResult, Validator};

// ============================================================================
// Resume Upload Validators
// ============================================================================

/// The multipart fields relevant to ingestion validation. Runs before any
/// extraction work; all-or-nothing.
#[derive(Debug)]
pub struct ResumeUpload {
    /// Whether a `resume` part was present in the form at all
    pub file_supplied: bool,
    /// The declared original filename, if the part carried one
    pub filename: Option<String>,
}

pub struct ResumeUploadValidator;

impl Validator<ResumeUpload> for ResumeUploadValidator {
    fn validate(&self, data: &ResumeUpload) -> ValidationResult {
        let mut result = ValidationResult::new();

        if !data.file_supplied {
            result.add_error("resume", "No resume file uploaded.");
            return result;
        }

        // A part without a declared filename gives no evidence it is a PDF
        let is_pdf = data
            .filename
            .as_ref()
            .map(|name| name.to_lowercase().ends_with(".pdf"))
            .unwrap_or(false);

        if !is_pdf {
            result.add_error("resume", "Only PDF files are allowed.");
        }

        result
    }
}
