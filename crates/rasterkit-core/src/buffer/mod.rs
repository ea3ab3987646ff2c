//! PixelBuffer - the main image container
//!
//! A `PixelBuffer` is a 2D addressable view over a flat sequence of
//! 8-bit samples, either single-channel intensities or interleaved RGB
//! triples.
//!
//! # Sample layout
//!
//! Samples are stored row-major and interleaved; the sample for channel
//! `c` of the pixel at `(x, y)` lives at index
//! `(y * width + x) * channels + c`. This mapping is part of the public
//! contract: buffers exchanged with the image store use exactly this
//! layout.
//!
//! # Ownership model
//!
//! `PixelBuffer` uses `Arc` for efficient cloning (shared ownership) and
//! is immutable once constructed; every operation returns a new buffer.
//! Result buffers are assembled through [`PixelBufferMut`], obtained via
//! [`PixelBuffer::try_into_mut`] or [`PixelBuffer::to_mut`], and sealed
//! with `Into<PixelBuffer>`.

mod access;
pub mod arith;
pub mod convert;

pub use convert::RgbChannel;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Number of sample channels per pixel
///
/// Only single-channel (grayscale) and three-channel (RGB) layouts are
/// representable; everything else is rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ChannelCount {
    /// Single intensity channel
    Gray = 1,
    /// Interleaved red, green, blue
    Rgb = 3,
}

impl ChannelCount {
    /// Create `ChannelCount` from a raw channel count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedChannelCount`] if `channels` is not 1 or 3.
    pub fn from_count(channels: u32) -> Result<Self> {
        match channels {
            1 => Ok(ChannelCount::Gray),
            3 => Ok(ChannelCount::Rgb),
            _ => Err(Error::UnsupportedChannelCount(channels)),
        }
    }

    /// Get the number of samples per pixel.
    #[inline]
    pub fn count(self) -> u32 {
        self as u32
    }
}

/// Internal buffer data
#[derive(Debug)]
struct BufferData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Samples per pixel
    channels: ChannelCount,
    /// Interleaved sample data, length = width * height * channels
    data: Vec<u8>,
}

impl BufferData {
    #[inline]
    fn sample_index(&self, x: u32, y: u32, c: u32) -> usize {
        ((y as usize * self.width as usize + x as usize) * self.channels.count() as usize)
            + c as usize
    }
}

/// PixelBuffer - main image container
///
/// Uses reference counting via `Arc` for efficient cloning; the sample
/// data is never mutated after construction.
///
/// # Examples
///
/// ```
/// use rasterkit_core::{ChannelCount, PixelBuffer};
///
/// let buf = PixelBuffer::new(640, 480, ChannelCount::Rgb);
/// assert_eq!(buf.width(), 640);
/// assert_eq!(buf.height(), 480);
/// assert_eq!(buf.data().len(), 640 * 480 * 3);
/// ```
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    inner: Arc<BufferData>,
}

impl PixelBuffer {
    /// Create a new buffer with all samples zero-initialized.
    ///
    /// Zero-sized buffers are permitted; every operation on them
    /// degenerates to an empty result.
    pub fn new(width: u32, height: u32, channels: ChannelCount) -> Self {
        let len = width as usize * height as usize * channels.count() as usize;
        PixelBuffer {
            inner: Arc::new(BufferData {
                width,
                height,
                channels,
                data: vec![0u8; len],
            }),
        }
    }

    /// Create a buffer from existing interleaved sample data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SampleCountMismatch`] if `data.len()` is not
    /// `width * height * channels`.
    pub fn from_vec(width: u32, height: u32, channels: ChannelCount, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * channels.count() as usize;
        if data.len() != expected {
            return Err(Error::SampleCountMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(PixelBuffer {
            inner: Arc::new(BufferData {
                width,
                height,
                channels,
                data,
            }),
        })
    }

    /// Get the buffer width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the buffer height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the channel layout.
    #[inline]
    pub fn channels(&self) -> ChannelCount {
        self.inner.channels
    }

    /// Get raw access to the interleaved sample data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get the number of strong references to this buffer.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Create a new buffer with the same width, height, and channel
    /// layout, all samples zero-initialized.
    ///
    /// This is the blank canvas used as the output accumulator by every
    /// neighborhood operation: cells the operation never writes keep
    /// the zero (black) value.
    pub fn create_template(&self) -> Self {
        PixelBuffer::new(self.inner.width, self.inner.height, self.inner.channels)
    }

    /// Check if two buffers have the same width, height, and channels.
    pub fn same_shape(&self, other: &PixelBuffer) -> bool {
        self.inner.width == other.inner.width
            && self.inner.height == other.inner.height
            && self.inner.channels == other.inner.channels
    }

    /// Require matching shapes for a binary per-pixel operation.
    pub(crate) fn check_same_shape(&self, other: &PixelBuffer) -> Result<()> {
        if !self.same_shape(other) {
            return Err(Error::ShapeMismatch(
                self.inner.width,
                self.inner.height,
                self.inner.channels.count(),
                other.inner.width,
                other.inner.height,
                other.inner.channels.count(),
            ));
        }
        Ok(())
    }

    /// Create a deep copy of this buffer.
    ///
    /// Unlike `clone()` which shares data via `Arc`, this creates a
    /// completely independent copy.
    pub fn deep_clone(&self) -> Self {
        PixelBuffer {
            inner: Arc::new(BufferData {
                width: self.inner.width,
                height: self.inner.height,
                channels: self.inner.channels,
                data: self.inner.data.clone(),
            }),
        }
    }

    /// Try to get mutable access to the sample data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<PixelBufferMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixelBufferMut { inner: data }),
            Err(arc) => Err(PixelBuffer { inner: arc }),
        }
    }

    /// Create a mutable copy of this buffer.
    ///
    /// Always creates a new copy that can be modified.
    pub fn to_mut(&self) -> PixelBufferMut {
        PixelBufferMut {
            inner: BufferData {
                width: self.inner.width,
                height: self.inner.height,
                channels: self.inner.channels,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Mutable pixel buffer
///
/// Exists only while a result buffer is being assembled. Convert back to
/// an immutable [`PixelBuffer`] using `Into<PixelBuffer>`; exclusive
/// access is enforced at compile time.
#[derive(Debug)]
pub struct PixelBufferMut {
    inner: BufferData,
}

impl PixelBufferMut {
    /// Get the buffer width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the buffer height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the channel layout.
    #[inline]
    pub fn channels(&self) -> ChannelCount {
        self.inner.channels
    }

    /// Get raw access to the sample data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get mutable access to the sample data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }

    /// Reset all samples to zero.
    pub fn clear(&mut self) {
        self.inner.data.fill(0);
    }
}

impl From<PixelBufferMut> for PixelBuffer {
    fn from(buf_mut: PixelBufferMut) -> Self {
        PixelBuffer {
            inner: Arc::new(buf_mut.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_count() {
        assert_eq!(ChannelCount::from_count(1).unwrap(), ChannelCount::Gray);
        assert_eq!(ChannelCount::from_count(3).unwrap(), ChannelCount::Rgb);
        assert!(matches!(
            ChannelCount::from_count(2),
            Err(Error::UnsupportedChannelCount(2))
        ));
        assert!(ChannelCount::from_count(4).is_err());

        assert_eq!(ChannelCount::Gray.count(), 1);
        assert_eq!(ChannelCount::Rgb.count(), 3);
    }

    #[test]
    fn test_buffer_creation() {
        let buf = PixelBuffer::new(100, 200, ChannelCount::Rgb);
        assert_eq!(buf.width(), 100);
        assert_eq!(buf.height(), 200);
        assert_eq!(buf.channels(), ChannelCount::Rgb);
        assert_eq!(buf.data().len(), 100 * 200 * 3);
        assert!(buf.data().iter().all(|&s| s == 0));
    }

    #[test]
    fn test_buffer_creation_zero_sized() {
        let buf = PixelBuffer::new(0, 10, ChannelCount::Gray);
        assert_eq!(buf.data().len(), 0);
        assert!(buf.get(0, 0).is_err());
    }

    #[test]
    fn test_from_vec() {
        let data = vec![1, 2, 3, 4, 5, 6];
        let buf = PixelBuffer::from_vec(2, 1, ChannelCount::Rgb, data).unwrap();
        assert_eq!(buf.get(0, 0).unwrap(), &[1, 2, 3]);
        assert_eq!(buf.get(1, 0).unwrap(), &[4, 5, 6]);
    }

    #[test]
    fn test_from_vec_length_mismatch() {
        let err = PixelBuffer::from_vec(2, 2, ChannelCount::Gray, vec![0; 5]).unwrap_err();
        assert!(matches!(
            err,
            Error::SampleCountMismatch {
                expected: 4,
                actual: 5
            }
        ));
    }

    #[test]
    fn test_sample_index_contract() {
        // index(x, y, c) = (y*width + x)*channels + c
        let mut data = vec![0u8; 4 * 3 * 3];
        data[(2 * 4 + 1) * 3 + 2] = 77;
        let buf = PixelBuffer::from_vec(4, 3, ChannelCount::Rgb, data).unwrap();
        assert_eq!(buf.sample(1, 2, 2).unwrap(), 77);
    }

    #[test]
    fn test_clone_shares_data() {
        let buf1 = PixelBuffer::new(10, 10, ChannelCount::Gray);
        let buf2 = buf1.clone();
        assert_eq!(buf1.ref_count(), 2);
        assert_eq!(buf1.data().as_ptr(), buf2.data().as_ptr());
    }

    #[test]
    fn test_deep_clone() {
        let buf1 = PixelBuffer::new(10, 10, ChannelCount::Gray);
        let buf2 = buf1.deep_clone();
        assert_eq!(buf1.ref_count(), 1);
        assert_eq!(buf2.ref_count(), 1);
        assert_ne!(buf1.data().as_ptr(), buf2.data().as_ptr());
    }

    #[test]
    fn test_create_template_zeroed() {
        let mut src_mut = PixelBuffer::new(5, 5, ChannelCount::Gray).try_into_mut().unwrap();
        src_mut.set_sample(2, 2, 0, 200).unwrap();
        let src: PixelBuffer = src_mut.into();

        let tmpl = src.create_template();
        assert!(src.same_shape(&tmpl));
        assert!(tmpl.data().iter().all(|&s| s == 0));
    }

    #[test]
    fn test_try_into_mut() {
        let buf = PixelBuffer::new(4, 4, ChannelCount::Gray);
        let mut buf_mut = buf.try_into_mut().unwrap();
        buf_mut.set_sample(1, 1, 0, 42).unwrap();
        let buf: PixelBuffer = buf_mut.into();
        assert_eq!(buf.sample(1, 1, 0).unwrap(), 42);
    }

    #[test]
    fn test_try_into_mut_shared_fails() {
        let buf1 = PixelBuffer::new(4, 4, ChannelCount::Gray);
        let _buf2 = buf1.clone();
        assert!(buf1.try_into_mut().is_err());
    }

    #[test]
    fn test_same_shape() {
        let a = PixelBuffer::new(10, 20, ChannelCount::Gray);
        let b = PixelBuffer::new(10, 20, ChannelCount::Gray);
        let c = PixelBuffer::new(10, 20, ChannelCount::Rgb);
        let d = PixelBuffer::new(20, 10, ChannelCount::Gray);
        assert!(a.same_shape(&b));
        assert!(!a.same_shape(&c));
        assert!(!a.same_shape(&d));
    }
}
