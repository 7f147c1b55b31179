// Common module - shared types and utilities across all modules

pub mod error;
pub mod id_generator;
pub mod state;
pub mod validation;

// Re-export commonly used types for convenience
pub use error::ApiError;
pub use id_generator::generate_upload_id;
pub use state::AppState;
pub use validation::{ValidationResult, Validator};
