//! Error types for pack generation and lookup.

use thiserror::Error;

/// Result type alias using PackError.
pub type Result<T> = std::result::Result<T, PackError>;

/// Main error type for resource-pack operations.
#[derive(Error, Debug)]
pub enum PackError {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse or produce JSON data.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to write or read a ZIP archive.
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Downloaded bytes did not decode as an image.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Failed to fetch a remote texture or icon.
    #[error("Download error: {0}")]
    Download(#[from] reqwest::Error),

    /// A resource identifier contained characters outside the allowed set.
    #[error("Invalid resource identifier: {0}")]
    InvalidIdentifier(String),

    /// The generated pack tree is missing or malformed.
    #[error("Invalid pack layout: {0}")]
    InvalidPack(String),
}
