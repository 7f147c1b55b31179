// src/analysis/routes.rs

use axum::{routing::post, Router};

use super::handlers;

/// Create the resume analysis router
pub fn analysis_routes() -> Router {
    Router::new().route("/analyze", post(handlers::analyze_resume))
}
