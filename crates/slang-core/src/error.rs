use thiserror::Error;

/// Top-level error type for slangbot.
#[derive(Debug, Error)]
pub enum SlangError {
    /// Error from a messaging channel.
    #[error("channel error: {0}")]
    Channel(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Dictionary load/persist error.
    #[error("dictionary error: {0}")]
    Dictionary(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
