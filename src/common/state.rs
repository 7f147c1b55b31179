// Application state shared across all modules

use std::path::PathBuf;
use std::sync::Arc;

use crate::services::GeminiService;

/// Application state containing configuration and long-lived services.
///
/// The inference client is initialized once at startup and reused across
/// requests; handlers only ever take read locks on the shared state.
#[derive(Clone)]
pub struct AppState {
    pub uploads_dir: PathBuf,
    pub gemini_service: Arc<GeminiService>,
}
