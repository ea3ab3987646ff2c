//! Error types for rasterkit-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.
//!
//! Out-of-range access is always a hard failure here; accessors never
//! clamp coordinates silently.

use thiserror::Error;

/// Rasterkit core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Coordinates outside the buffer extent
    #[error("coordinates out of bounds: ({x}, {y}) outside {width}x{height}")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Channel index outside the pixel
    #[error("channel index out of bounds: {channel} >= {channels}")]
    ChannelOutOfBounds { channel: u32, channels: u32 },

    /// Channel count other than 1 (grayscale) or 3 (RGB)
    #[error("unsupported channel count: {0}")]
    UnsupportedChannelCount(u32),

    /// Flat sample data does not match width*height*channels
    #[error("sample count mismatch: expected {expected}, got {actual}")]
    SampleCountMismatch { expected: usize, actual: usize },

    /// Incompatible buffer shapes for a binary per-pixel operation
    #[error("incompatible buffer shapes: {0}x{1}x{2} vs {3}x{4}x{5}")]
    ShapeMismatch(u32, u32, u32, u32, u32, u32),

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for rasterkit core operations
pub type Result<T> = std::result::Result<T, Error>;
