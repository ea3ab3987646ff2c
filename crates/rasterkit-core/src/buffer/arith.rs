//! Buffer arithmetic operations
//!
//! Pixel-wise combination of two buffers of identical shape:
//!
//! - Saturating addition and subtraction (`arith_add`, `arith_subtract`)
//! - Alpha blending (`blend`)
//! - Weighted subtraction (`weighted_subtract`)
//!
//! Every operation returns a new buffer; inputs are never mutated.
//! Results are clamped into the 8-bit sample range.

use super::PixelBuffer;
use crate::error::{Error, Result};

impl PixelBuffer {
    /// Add another buffer to this one: self + other
    ///
    /// Each output sample is the saturating sum of the corresponding
    /// input samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if the buffers differ in width,
    /// height, or channel count.
    ///
    /// # Example
    ///
    /// ```
    /// use rasterkit_core::{ChannelCount, PixelBuffer};
    ///
    /// let a = PixelBuffer::new(10, 10, ChannelCount::Gray);
    /// let b = PixelBuffer::new(10, 10, ChannelCount::Gray);
    /// let sum = a.arith_add(&b).unwrap();
    /// ```
    pub fn arith_add(&self, other: &PixelBuffer) -> Result<PixelBuffer> {
        self.check_same_shape(other)?;
        let mut out = self.create_template().try_into_mut().unwrap();
        for ((o, &a), &b) in out
            .data_mut()
            .iter_mut()
            .zip(self.data().iter())
            .zip(other.data().iter())
        {
            *o = a.saturating_add(b);
        }
        Ok(out.into())
    }

    /// Subtract another buffer from this one: self - other
    ///
    /// Each output sample is the saturating difference; results clamp
    /// at zero rather than wrapping.
    pub fn arith_subtract(&self, other: &PixelBuffer) -> Result<PixelBuffer> {
        self.check_same_shape(other)?;
        let mut out = self.create_template().try_into_mut().unwrap();
        for ((o, &a), &b) in out
            .data_mut()
            .iter_mut()
            .zip(self.data().iter())
            .zip(other.data().iter())
        {
            *o = a.saturating_sub(b);
        }
        Ok(out.into())
    }

    /// Blend with another buffer: self * (1 - fract) + other * fract
    ///
    /// `fract = 0.0` returns self, `fract = 1.0` returns other.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `fract` is outside [0, 1]
    /// and [`Error::ShapeMismatch`] for differently shaped inputs.
    pub fn blend(&self, other: &PixelBuffer, fract: f32) -> Result<PixelBuffer> {
        if !(0.0..=1.0).contains(&fract) {
            return Err(Error::InvalidParameter(
                "blend fraction must be in [0.0, 1.0]".to_string(),
            ));
        }
        self.check_same_shape(other)?;
        let mut out = self.create_template().try_into_mut().unwrap();
        for ((o, &a), &b) in out
            .data_mut()
            .iter_mut()
            .zip(self.data().iter())
            .zip(other.data().iter())
        {
            let v = a as f32 * (1.0 - fract) + b as f32 * fract;
            *o = v.round().clamp(0.0, 255.0) as u8;
        }
        Ok(out.into())
    }

    /// Weighted subtraction: self * weight - other * (1 - weight)
    ///
    /// Each output sample is clamped into the 8-bit range, so negative
    /// intermediate values come out black.
    pub fn weighted_subtract(&self, other: &PixelBuffer, weight: f32) -> Result<PixelBuffer> {
        if !(0.0..=1.0).contains(&weight) {
            return Err(Error::InvalidParameter(
                "subtraction weight must be in [0.0, 1.0]".to_string(),
            ));
        }
        self.check_same_shape(other)?;
        let mut out = self.create_template().try_into_mut().unwrap();
        for ((o, &a), &b) in out
            .data_mut()
            .iter_mut()
            .zip(self.data().iter())
            .zip(other.data().iter())
        {
            let v = a as f32 * weight - b as f32 * (1.0 - weight);
            *o = v.round().clamp(0.0, 255.0) as u8;
        }
        Ok(out.into())
    }
}
