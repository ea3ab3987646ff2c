//! Error types for rasterkit-morph

use thiserror::Error;

/// Errors that can occur during morphological operations
#[derive(Debug, Error)]
pub enum MorphError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rasterkit_core::Error),

    /// Invalid kernel geometry (even or zero size)
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),

    /// Unsupported channel layout for this operation
    #[error("unsupported channel layout: expected {expected}, got {actual} channel(s)")]
    UnsupportedChannels { expected: &'static str, actual: u32 },
}

/// Result type for morphological operations
pub type MorphResult<T> = Result<T, MorphError>;
