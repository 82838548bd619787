//! Document model errors.

use serde_json::error::Category;

/// Error produced when a payload cannot become a [`crate::Document`].
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Payload is not syntactically valid JSON.
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),
    /// Payload is JSON but a field has the wrong shape.
    #[error("Malformed document: {0}")]
    Malformed(#[source] serde_json::Error),
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Syntax | Category::Eof | Category::Io => Self::InvalidJson(err),
            Category::Data => Self::Malformed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_is_invalid_json() {
        let err: ModelError = serde_json::from_str::<serde_json::Value>("{oops")
            .unwrap_err()
            .into();
        assert!(matches!(err, ModelError::InvalidJson(_)));
    }

    #[test]
    fn test_truncated_input_is_invalid_json() {
        let err: ModelError = serde_json::from_str::<serde_json::Value>("{\"a\": ")
            .unwrap_err()
            .into();
        assert!(matches!(err, ModelError::InvalidJson(_)));
    }

    #[test]
    fn test_type_mismatch_is_malformed() {
        let err: ModelError = serde_json::from_str::<Vec<String>>("{\"a\": 1}")
            .unwrap_err()
            .into();
        assert!(matches!(err, ModelError::Malformed(_)));
        assert!(err.to_string().starts_with("Malformed document"));
    }
}
