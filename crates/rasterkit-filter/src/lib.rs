//! rasterkit-filter - Kernel convolution for raster editing
//!
//! This crate provides weighted convolution over the structuring
//! element type shared with `rasterkit-morph`:
//!
//! - [`convolve`]: auto-dispatch on the buffer's channel layout
//! - [`convolve_gray`] / [`convolve_rgb`]: per-layout entry points
//!
//! Averaging kernels are normalized by their weight sum; zero-sum edge
//! kernels pass their raw signal through, clamped to the 8-bit range.

pub mod convolve;
mod error;

pub use convolve::{convolve, convolve_gray, convolve_rgb};
pub use error::{FilterError, FilterResult};

// The kernel type itself lives with the morphology crate
pub use rasterkit_morph::StructElement;
