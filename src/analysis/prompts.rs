// src/analysis/prompts.rs
//! Prompt construction for the ATS analysis request
//!
//! Pure formatting; this stage cannot fail. The prompt pins the exact output
//! schema (field names, types, ranges) that the parser validates against.

/// Framing used when the caller supplied no job description
pub const GENERAL_ANALYSIS_FRAMING: &str = "General job market analysis";

/// Build the full analysis instruction sent to the inference service
pub fn build_analysis_prompt(resume_text: &str, job_description: Option<&str>) -> String {
    let job_description = match job_description {
        Some(jd) if !jd.trim().is_empty() => jd,
        _ => GENERAL_ANALYSIS_FRAMING,
    };

    format!(
        r#"As an expert ATS (Applicant Tracking System) analyzer and career consultant, please analyze the following resume against the job description and provide a comprehensive evaluation.

RESUME TEXT:
{resume_text}

JOB DESCRIPTION:
{job_description}

Please provide your analysis in the following JSON format:
{{
    "atsScore": <number between 0-100>,
    "keywordMatch": <number between 0-100>,
    "formatScore": <number between 0-100>,
    "dos": [
        "List of 4-6 specific recommendations of what to include or improve"
    ],
    "donts": [
        "List of 4-6 specific things to avoid or remove"
    ],
    "improvements": [
        "List of 5-8 specific actionable improvement suggestions"
    ],
    "missingKeywords": [
        "List of important keywords from job description missing in resume"
    ]
}}

Guidelines for scoring:
- atsScore: Overall ATS compatibility (format, structure, keywords)
- keywordMatch: How well resume keywords match job requirements
- formatScore: ATS-friendly formatting (no graphics, clear structure, etc.)

Provide specific, actionable advice. Focus on:
1. ATS optimization
2. Keyword matching
3. Format compatibility
4. Content improvements
5. Industry-specific recommendations

Return only the JSON object, no additional text."#
    )
}
