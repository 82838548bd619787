//! Codec error types.

/// Error raised while exporting or importing an embedded document.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The HTML carries neither a base64 nor a legacy payload.
    #[error("No embedded newsletter data found; this HTML was not exported by the editor")]
    NotFound,
    /// A base64 payload was found but could not be decoded.
    #[error("Corrupted embedded data: {reason}")]
    Corrupted { reason: String },
    /// A legacy payload was found but is not valid JSON.
    #[error("Invalid JSON data: {0}")]
    InvalidJson(#[source] serde_json::Error),
    /// The payload decoded but does not describe a document.
    #[error("Malformed document: {0}")]
    Malformed(#[source] serde_json::Error),
    /// The document could not be serialized for embedding.
    #[error("Failed to serialize document: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl CodecError {
    pub(crate) fn corrupted(reason: impl std::fmt::Display) -> Self {
        Self::Corrupted {
            reason: reason.to_string(),
        }
    }
}
