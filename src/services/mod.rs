// src/services/mod.rs
//
// Shared services module containing business logic services
// that can be used across different domain modules

pub mod gemini;

// Re-export commonly used types for convenience
pub use gemini::{CompletionModel, GeminiConfig, GeminiError, GeminiService};
