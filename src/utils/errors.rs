use thiserror::Error;

/// Main error type for Statbot
#[derive(Error, Debug)]
pub enum StatbotError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("UI error: {0}")]
    UIError(String),
}
