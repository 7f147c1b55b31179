// src/common/id_generator.rs
//! Crockford Base32 ID Generator
//!
//! Generates human-readable upload identifiers using Crockford Base32
//! encoding. Format: UP_XXXXXXXX.
//!
//! Benefits:
//! - No ambiguous characters (excludes I, L, O, U)
//! - Case-insensitive
//! - Easy to read in logs and on disk

use rand::Rng;

/// Crockford Base32 alphabet (excludes I, L, O, U to avoid confusion)
const CROCKFORD_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Generate a random Crockford Base32 string of specified length
fn generate_crockford_string(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..32);
            CROCKFORD_ALPHABET[idx] as char
        })
        .collect()
}

/// Generate an upload ID (UP_XXXXXXXX), used for temp file names
pub fn generate_upload_id() -> String {
    format!("UP_{}", generate_crockford_string(8))
}
