use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("failed to construct demo '{name}': {reason}")]
    Construction { name: String, reason: String },

    #[error("{0}")]
    Demonstration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, GalleryError>;
