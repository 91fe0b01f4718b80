//! Error types for kvart.

use thiserror::Error;

/// Errors that can occur while loading configuration or handling the feed.
///
/// The transformation rules themselves are total over well-formed events
/// and have no error variants of their own.
#[derive(Error, Debug)]
pub enum KvartError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("ICS parse error: {0}")]
    IcsParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for kvart operations.
pub type KvartResult<T> = Result<T, KvartError>;
