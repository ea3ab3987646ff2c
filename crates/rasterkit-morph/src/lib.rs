//! rasterkit-morph - Morphological operations for raster editing
//!
//! This crate provides:
//!
//! - [`StructElement`]: the structuring element / kernel shared by the
//!   neighborhood operators, with cross and Laplacian presets
//! - [`dilate`]: morphological dilation with stamp-overwrite overlap
//!   semantics in row-major scan order
//!
//! Weighted convolution over the same element type lives in
//! `rasterkit-filter`.

pub mod dilate;
pub mod element;
mod error;

pub use dilate::dilate;
pub use element::StructElement;
pub use error::{MorphError, MorphResult};
