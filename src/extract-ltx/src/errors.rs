//! Error types for the site extraction library.

use thiserror::Error;

/// Main error type for site extraction operations.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Reading a file or directory failed
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Invalid URL format
    #[error("Invalid URL: {0}")]
    UrlParseError(#[from] url::ParseError),

    /// Directory traversal failed
    #[error("Directory walk error: {0}")]
    WalkError(#[from] walkdir::Error),

    /// A CSS selector failed to compile
    #[error("Selector error: {0}")]
    SelectorError(String),
}

/// Type alias for Result with ExtractError
pub type Result<T> = std::result::Result<T, ExtractError>;
