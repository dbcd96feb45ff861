//! Record loading error types.

use std::path::PathBuf;

/// Errors that can occur while reading train records.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The record file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The record file is not a JSON array of train records
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
