//! Error types for the embedding service.

use thiserror::Error;

/// Library-level error type for embedding service operations.
#[derive(Error, Debug)]
pub enum EmbedError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Embedding generation failed: {0}")]
    Embedding(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("OpenAI API error: {0}")]
    OpenAI(String),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("embedding service error: {0}")]
    ServiceResponse(String),
}

/// Result type alias for embedding service operations.
pub type Result<T> = std::result::Result<T, EmbedError>;
