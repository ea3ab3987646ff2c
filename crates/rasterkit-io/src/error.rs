//! I/O error types
//!
//! Provides a unified error type for all image I/O operations. Each
//! format-specific module maps its underlying library errors into
//! `IoError` variants so that callers only need to handle one error
//! type. Unlike the in-memory operations, these failures are
//! recoverable: the caller can retry with another path or format.

use thiserror::Error;

/// Error type for image I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The image format is not supported or not enabled via features
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A format-specific decoder returned an error
    #[error("decode error: {0}")]
    DecodeError(String),

    /// A format-specific encoder returned an error
    #[error("encode error: {0}")]
    EncodeError(String),

    /// An error from the core library (e.g. sample count mismatch)
    #[error("core error: {0}")]
    Core(#[from] rasterkit_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
