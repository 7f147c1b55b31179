// src/analysis/mod.rs
//! Resume analysis pipeline
//!
//! validation -> text extraction -> prompt construction -> inference ->
//! structured-response validation -> fallback synthesis -> assembly.
//!
//! Inference and parse failures degrade in place to a deterministic fallback
//! report; validation and extraction failures reject the request. The
//! response envelope shape never changes based on which branch ran.

pub mod extractor;
pub mod fallback;
pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompts;
pub mod routes;
pub mod storage;
pub mod validators;

#[cfg(test)]
mod tests;

pub use routes::analysis_routes;
