// src/analysis/storage.rs
//! Scoped temporary storage for uploaded resume documents
//!
//! An upload lives exactly as long as the pipeline invocation that owns it.
//! The happy path removes the file right after extraction; `Drop` covers
//! every early return and panic, so a file is never deleted twice and never
//! orphaned.

use std::path::{Path, PathBuf};
use tracing::warn;

use crate::common::generate_upload_id;

/// A temporary upload file, deleted exactly once on every exit path
#[derive(Debug)]
pub struct TempUpload {
    path: PathBuf,
    deleted: bool,
}

impl TempUpload {
    /// Persist uploaded bytes under `dir` with a unique generated filename
    pub async fn write(dir: &Path, data: &[u8]) -> std::io::Result<Self> {
        let filename = format!(
            "{}_{}.pdf",
            generate_upload_id(),
            chrono::Utc::now().timestamp_millis()
        );
        let path = dir.join(filename);
        tokio::fs::write(&path, data).await?;

        Ok(Self {
            path,
            deleted: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the file now instead of waiting for drop
    pub async fn remove(mut self) {
        if let Err(e) = tokio::fs::remove_file(&self.path).await {
            warn!(path = %self.path.display(), error = %e, "Failed to remove temp upload");
        }
        self.deleted = true;
    }
}

impl Drop for TempUpload {
    fn drop(&mut self) {
        if !self.deleted {
            if let Err(e) = std::fs::remove_file(&self.path) {
                warn!(path = %self.path.display(), error = %e, "Failed to remove temp upload on drop");
            }
        }
    }
}
