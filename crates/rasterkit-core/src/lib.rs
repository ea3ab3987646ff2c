//! Rasterkit Core - Basic data structures for raster image editing
//!
//! This crate provides the fundamental data structures used throughout
//! the rasterkit image editing library:
//!
//! - [`PixelBuffer`] / [`PixelBufferMut`] - The main image container
//!   (immutable / mutable)
//! - [`ChannelCount`] - Grayscale or RGB sample layout
//! - Per-pixel channel algebra: arithmetic combination, blending,
//!   grayscale conversion, inversion, thresholding, channel scaling
//!
//! Neighborhood operations (dilation, convolution) live in the
//! `rasterkit-morph` and `rasterkit-filter` crates; image file I/O lives
//! in `rasterkit-io`.

pub mod buffer;
pub mod error;

pub use buffer::{ChannelCount, PixelBuffer, PixelBufferMut, RgbChannel};
pub use error::{Error, Result};
