//! Error types for rasterkit-filter

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rasterkit_core::Error),

    /// Unsupported channel layout for this entry point
    #[error("unsupported channel layout: expected {expected}, got {actual} channel(s)")]
    UnsupportedChannels { expected: &'static str, actual: u32 },
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
