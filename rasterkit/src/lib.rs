//! Rasterkit - Raster image editing for Rust
//!
//! # Overview
//!
//! Rasterkit edits in-memory raster images through pixel-level
//! transforms:
//!
//! - Channel algebra: grayscale conversion, inversion, thresholding,
//!   blending, saturating arithmetic, per-channel scaling
//! - Morphological dilation with a structuring element
//! - Kernel convolution (averaging, edge detection)
//! - PNG and JPEG loading/saving through a directory-pair image store
//!
//! # Example
//!
//! ```
//! use rasterkit::{ChannelCount, PixelBuffer};
//! use rasterkit::morph::StructElement;
//!
//! let buf = PixelBuffer::new(64, 64, ChannelCount::Gray);
//! let cross = StructElement::create_cross(3, 255.0).unwrap();
//! let dilated = rasterkit::morph::dilate(&buf, &cross).unwrap();
//! assert_eq!(dilated.width(), 64);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use rasterkit_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use rasterkit_filter as filter;
pub use rasterkit_io as io;
pub use rasterkit_morph as morph;
