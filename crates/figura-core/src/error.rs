//! Error types.

use thiserror::Error;

/// Errors from scene serialization.
#[derive(Debug, Error)]
pub enum SceneError {
    /// JSON encoding or decoding failed.
    #[error("scene JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
