// src/analysis/models.rs

use serde::{Deserialize, Serialize};

/// Structured ATS compatibility report
///
/// All six fields are always present regardless of which pipeline branch
/// produced the report, and the three scores are always within 0-100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    #[serde(rename = "atsScore")]
    pub ats_score: u8,
    #[serde(rename = "keywordMatch")]
    pub keyword_match: u8,
    #[serde(rename = "formatScore")]
    pub format_score: u8,
    pub dos: Vec<String>,
    pub donts: Vec<String>,
    pub improvements: Vec<String>,
    #[serde(rename = "missingKeywords")]
    pub missing_keywords: Vec<String>,
}

/// Provenance of the report handed to the assembler. Logged for diagnosis;
/// the caller only sees the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisOutcome {
    Succeeded,
    FallbackNoJobDescription,
    FallbackInferenceFailed,
    FallbackParseFailed,
}

impl AnalysisOutcome {
    pub fn is_fallback(&self) -> bool {
        !matches!(self, AnalysisOutcome::Succeeded)
    }

    /// Human-readable message for the response envelope
    pub fn message(&self) -> &'static str {
        if self.is_fallback() {
            "Resume analysis completed (using fallback analysis)"
        } else {
            "Resume analysis completed successfully"
        }
    }
}

/// Outward-facing response envelope for POST /analyze
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisReport>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serializes_camel_case() {
        let report = AnalysisReport {
            ats_score: 75,
            keyword_match: 70,
            format_score: 85,
            dos: vec!["a".to_string()],
            donts: vec!["b".to_string()],
            improvements: vec!["c".to_string()],
            missing_keywords: vec![],
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["atsScore"], 75);
        assert_eq!(json["keywordMatch"], 70);
        assert_eq!(json["formatScore"], 85);
        assert!(json["missingKeywords"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(
            AnalysisOutcome::Succeeded.message(),
            "Resume analysis completed successfully"
        );
        for outcome in [
            AnalysisOutcome::FallbackNoJobDescription,
            AnalysisOutcome::FallbackInferenceFailed,
            AnalysisOutcome::FallbackParseFailed,
        ] {
            assert!(outcome.is_fallback());
            assert_eq!(
                outcome.message(),
                "Resume analysis completed (using fallback analysis)"
            );
        }
    }

    #[test]
    fn test_envelope_omits_missing_analysis() {
        let response = AnalyzeResponse {
            success: false,
            message: "No resume file uploaded.".to_string(),
            analysis: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("analysis").is_none());
        assert_eq!(json["success"], false);
    }
}
