use thiserror::Error;

/// Errors raised when adding a custom sticker to the palette
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StickerError {
    /// The prompt was cancelled or the text was blank
    #[error("sticker text is empty")]
    Empty,
}

/// Errors that can occur while loading the sketchpad configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;
