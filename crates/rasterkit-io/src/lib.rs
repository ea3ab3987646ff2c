//! rasterkit-io - Image file I/O
//!
//! The external image store for the rasterkit editing pipeline:
//!
//! - [`read_image`] / [`write_image`]: decode and encode pixel buffers
//!   (PNG and JPEG, feature-gated)
//! - [`ImageFormat`]: magic-byte sniffing and extension mapping
//! - [`ImageStore`]: an originals/results directory pair
//!
//! Failures here are recoverable by the caller (retry with another
//! path or format), unlike the hard contract violations in the core.

mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;
pub mod store;

pub use error::{IoError, IoResult};
pub use format::ImageFormat;
pub use store::ImageStore;

use rasterkit_core::PixelBuffer;
use std::fs::{self, File};
use std::io::{BufWriter, Cursor};
use std::path::Path;

/// Read an image file into a pixel buffer, sniffing the format from
/// its magic bytes.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let data = fs::read(path)?;
    let format = ImageFormat::sniff(&data)?;
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(Cursor::new(data)),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(Cursor::new(data)),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "support for {other:?} is not enabled"
        ))),
    }
}

/// Write a pixel buffer to a file in the given format.
pub fn write_image<P: AsRef<Path>>(
    path: P,
    buffer: &PixelBuffer,
    format: ImageFormat,
) -> IoResult<()> {
    let writer = BufWriter::new(File::create(path)?);
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(writer, buffer),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::write_jpeg(writer, buffer),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "support for {other:?} is not enabled"
        ))),
    }
}
