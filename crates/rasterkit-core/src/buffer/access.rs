//! Pixel access functions
//!
//! Checked accessors return `Err` on any out-of-range coordinate; they
//! never clamp. The `*_unchecked` variants skip the range test for inner
//! loops that have already established their bounds, and panic on
//! misuse like any slice index.

use super::{PixelBuffer, PixelBufferMut};
use crate::error::{Error, Result};

impl PixelBuffer {
    /// Get the pixel at (x, y) as a slice of `channels` samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `x >= width` or `y >= height`.
    pub fn get(&self, x: u32, y: u32) -> Result<&[u8]> {
        if x >= self.inner.width || y >= self.inner.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.inner.width,
                height: self.inner.height,
            });
        }
        let start = self.inner.sample_index(x, y, 0);
        let len = self.inner.channels.count() as usize;
        Ok(&self.inner.data[start..start + len])
    }

    /// Get a single sample at (x, y, c).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] for coordinates outside the buffer
    /// and [`Error::ChannelOutOfBounds`] for `c >= channels`.
    pub fn sample(&self, x: u32, y: u32, c: u32) -> Result<u8> {
        if x >= self.inner.width || y >= self.inner.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.inner.width,
                height: self.inner.height,
            });
        }
        if c >= self.inner.channels.count() {
            return Err(Error::ChannelOutOfBounds {
                channel: c,
                channels: self.inner.channels.count(),
            });
        }
        Ok(self.inner.data[self.inner.sample_index(x, y, c)])
    }

    /// Get a single sample without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the flat index falls outside the sample data.
    #[inline]
    pub fn sample_unchecked(&self, x: u32, y: u32, c: u32) -> u8 {
        self.inner.data[self.inner.sample_index(x, y, c)]
    }
}

impl PixelBufferMut {
    /// Get the pixel at (x, y) as a slice of `channels` samples.
    pub fn get(&self, x: u32, y: u32) -> Result<&[u8]> {
        if x >= self.inner.width || y >= self.inner.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.inner.width,
                height: self.inner.height,
            });
        }
        let start = self.inner.sample_index(x, y, 0);
        let len = self.inner.channels.count() as usize;
        Ok(&self.inner.data[start..start + len])
    }

    /// Set the pixel at (x, y) from a slice of `channels` samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] for coordinates outside the buffer
    /// and [`Error::SampleCountMismatch`] if `pixel` has the wrong length.
    pub fn set(&mut self, x: u32, y: u32, pixel: &[u8]) -> Result<()> {
        if x >= self.inner.width || y >= self.inner.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.inner.width,
                height: self.inner.height,
            });
        }
        let len = self.inner.channels.count() as usize;
        if pixel.len() != len {
            return Err(Error::SampleCountMismatch {
                expected: len,
                actual: pixel.len(),
            });
        }
        let start = self.inner.sample_index(x, y, 0);
        self.inner.data[start..start + len].copy_from_slice(pixel);
        Ok(())
    }

    /// Get a single sample at (x, y, c).
    pub fn sample(&self, x: u32, y: u32, c: u32) -> Result<u8> {
        if x >= self.inner.width || y >= self.inner.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.inner.width,
                height: self.inner.height,
            });
        }
        if c >= self.inner.channels.count() {
            return Err(Error::ChannelOutOfBounds {
                channel: c,
                channels: self.inner.channels.count(),
            });
        }
        Ok(self.inner.data[self.inner.sample_index(x, y, c)])
    }

    /// Set a single sample at (x, y, c).
    pub fn set_sample(&mut self, x: u32, y: u32, c: u32, val: u8) -> Result<()> {
        if x >= self.inner.width || y >= self.inner.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.inner.width,
                height: self.inner.height,
            });
        }
        if c >= self.inner.channels.count() {
            return Err(Error::ChannelOutOfBounds {
                channel: c,
                channels: self.inner.channels.count(),
            });
        }
        let idx = self.inner.sample_index(x, y, c);
        self.inner.data[idx] = val;
        Ok(())
    }

    /// Get a single sample without bounds checking.
    #[inline]
    pub fn sample_unchecked(&self, x: u32, y: u32, c: u32) -> u8 {
        self.inner.data[self.inner.sample_index(x, y, c)]
    }

    /// Set a single sample without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the flat index falls outside the sample data.
    #[inline]
    pub fn set_sample_unchecked(&mut self, x: u32, y: u32, c: u32, val: u8) {
        let idx = self.inner.sample_index(x, y, c);
        self.inner.data[idx] = val;
    }
}

#[cfg(test)]
mod tests {
    use crate::{ChannelCount, Error, PixelBuffer};

    #[test]
    fn test_get_out_of_bounds() {
        let buf = PixelBuffer::new(4, 4, ChannelCount::Gray);
        assert!(buf.get(3, 3).is_ok());
        assert!(matches!(buf.get(4, 0), Err(Error::OutOfBounds { .. })));
        assert!(matches!(buf.get(0, 4), Err(Error::OutOfBounds { .. })));
    }

    #[test]
    fn test_sample_channel_out_of_bounds() {
        let buf = PixelBuffer::new(4, 4, ChannelCount::Gray);
        assert!(matches!(
            buf.sample(0, 0, 1),
            Err(Error::ChannelOutOfBounds {
                channel: 1,
                channels: 1
            })
        ));
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut buf = PixelBuffer::new(4, 4, ChannelCount::Rgb).try_into_mut().unwrap();
        assert!(buf.set(1, 1, &[1, 2, 3]).is_ok());
        assert!(matches!(
            buf.set(4, 1, &[1, 2, 3]),
            Err(Error::OutOfBounds { .. })
        ));
        assert!(matches!(
            buf.set(1, 1, &[1, 2]),
            Err(Error::SampleCountMismatch { .. })
        ));
    }

    #[test]
    fn test_set_then_get_roundtrip() {
        let mut buf = PixelBuffer::new(3, 3, ChannelCount::Rgb).try_into_mut().unwrap();
        buf.set(2, 1, &[10, 20, 30]).unwrap();
        let buf: PixelBuffer = buf.into();
        assert_eq!(buf.get(2, 1).unwrap(), &[10, 20, 30]);
        assert_eq!(buf.sample(2, 1, 1).unwrap(), 20);
        // Neighbors untouched
        assert_eq!(buf.get(1, 1).unwrap(), &[0, 0, 0]);
    }
}
