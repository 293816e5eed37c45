//! Error types for the platewatch service

/// Errors that can occur in the platewatch service
#[derive(Debug, thiserror::Error)]
pub enum PlatewatchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Image error: {0}")]
    Image(#[from] pw_images::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for platewatch operations
pub type Result<T> = std::result::Result<T, PlatewatchError>;
