// src/analysis/parser.rs
//! Parsing and validation of the raw model completion
//!
//! Models routinely wrap JSON in markdown fences; those are stripped before
//! parsing. Scores outside 0-100 are clamped rather than rejected, and
//! missing list fields default to empty. Anything else wrong with the payload
//! (unparseable text, wrong field types, non-string list entries, absent
//! scores) discards the whole result; a partially-valid report is never
//! returned.

use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;

use super::models::AnalysisReport;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Malformed analysis payload: {0}")]
    Malformed(String),

    #[error("Analysis payload violates expected schema: {0}")]
    Schema(String),
}

/// Raw schema as the model is asked to emit it
#[derive(Debug, Deserialize)]
struct RawReport {
    #[serde(rename = "atsScore")]
    ats_score: serde_json::Number,
    #[serde(rename = "keywordMatch")]
    keyword_match: serde_json::Number,
    #[serde(rename = "formatScore")]
    format_score: serde_json::Number,
    #[serde(default)]
    dos: Vec<String>,
    #[serde(default)]
    donts: Vec<String>,
    #[serde(default)]
    improvements: Vec<String>,
    #[serde(default, rename = "missingKeywords")]
    missing_keywords: Vec<String>,
}

/// Parse a raw completion into a validated report
pub fn parse_analysis(completion: &str) -> Result<AnalysisReport, ParseError> {
    let cleaned = strip_code_fences(completion);

    let value: serde_json::Value =
        serde_json::from_str(&cleaned).map_err(|e| ParseError::Malformed(e.to_string()))?;

    let raw: RawReport =
        serde_json::from_value(value).map_err(|e| ParseError::Schema(e.to_string()))?;

    Ok(AnalysisReport {
        ats_score: clamp_score(&raw.ats_score),
        keyword_match: clamp_score(&raw.keyword_match),
        format_score: clamp_score(&raw.format_score),
        dos: raw.dos,
        donts: raw.donts,
        improvements: raw.improvements,
        missing_keywords: raw.missing_keywords,
    })
}

/// Remove markdown code-fence markers that commonly wrap structured output
fn strip_code_fences(text: &str) -> String {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    let fence = FENCE.get_or_init(|| Regex::new(r"```(?:json)?").unwrap());
    fence.replace_all(text, "").trim().to_string()
}

/// Coerce a JSON number into the 0-100 score range
fn clamp_score(n: &serde_json::Number) -> u8 {
    n.as_f64().unwrap_or(0.0).round().clamp(0.0, 100.0) as u8
}
