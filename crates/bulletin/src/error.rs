//! CLI error types.

use bulletin_codec::CodecError;
use bulletin_config::ConfigError;
use bulletin_model::ModelError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Model(#[from] ModelError),

    #[error("{0}")]
    Codec(#[from] CodecError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),
}
