//! Per-pixel tone and channel conversions
//!
//! Elementwise maps over a single buffer: grayscale conversion,
//! inversion, thresholding, and per-channel scaling.

use super::{ChannelCount, PixelBuffer};
use crate::error::{Error, Result};

/// Perceptual weights for RGB-to-gray conversion.
const RED_WEIGHT: f32 = 0.3;
const GREEN_WEIGHT: f32 = 0.5;
const BLUE_WEIGHT: f32 = 0.2;

/// Color channel selector for per-channel operations on RGB buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RgbChannel {
    Red,
    Green,
    Blue,
}

impl RgbChannel {
    /// Sample index of this channel within an interleaved RGB pixel.
    #[inline]
    pub fn index(self) -> u32 {
        match self {
            RgbChannel::Red => 0,
            RgbChannel::Green => 1,
            RgbChannel::Blue => 2,
        }
    }
}

impl PixelBuffer {
    /// Convert to a single-channel grayscale buffer.
    ///
    /// RGB input is reduced to luminance with perceptual weights
    /// (0.3 R + 0.5 G + 0.2 B). Grayscale input is copied losslessly.
    pub fn to_gray(&self) -> PixelBuffer {
        match self.channels() {
            ChannelCount::Gray => self.deep_clone(),
            ChannelCount::Rgb => {
                let mut out = PixelBuffer::new(self.width(), self.height(), ChannelCount::Gray)
                    .try_into_mut()
                    .unwrap();
                for (o, px) in out.data_mut().iter_mut().zip(self.data().chunks_exact(3)) {
                    let lum = px[0] as f32 * RED_WEIGHT
                        + px[1] as f32 * GREEN_WEIGHT
                        + px[2] as f32 * BLUE_WEIGHT;
                    *o = lum.round().clamp(0.0, 255.0) as u8;
                }
                out.into()
            }
        }
    }

    /// Invert every sample: v -> 255 - v.
    pub fn invert(&self) -> PixelBuffer {
        let mut out = self.create_template().try_into_mut().unwrap();
        for (o, &v) in out.data_mut().iter_mut().zip(self.data().iter()) {
            *o = 255 - v;
        }
        out.into()
    }

    /// Binarize every sample against a cutoff: v >= cutoff -> 255, else 0.
    pub fn threshold(&self, cutoff: u8) -> PixelBuffer {
        let mut out = self.create_template().try_into_mut().unwrap();
        for (o, &v) in out.data_mut().iter_mut().zip(self.data().iter()) {
            *o = if v >= cutoff { 255 } else { 0 };
        }
        out.into()
    }

    /// Scale one channel of an RGB buffer by `channel_factor` and the
    /// other two by `others_factor`.
    ///
    /// `scale_channel(ch, 1.0, 0.0)` isolates a channel;
    /// `scale_channel(ch, f, 1.0)` boosts or damps it while leaving the
    /// rest untouched. Results are clamped into the 8-bit range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedChannelCount`] on grayscale input and
    /// [`Error::InvalidParameter`] for negative factors.
    pub fn scale_channel(
        &self,
        channel: RgbChannel,
        channel_factor: f32,
        others_factor: f32,
    ) -> Result<PixelBuffer> {
        if self.channels() != ChannelCount::Rgb {
            return Err(Error::UnsupportedChannelCount(self.channels().count()));
        }
        if channel_factor < 0.0 || others_factor < 0.0 {
            return Err(Error::InvalidParameter(
                "scale factors must be >= 0.0".to_string(),
            ));
        }
        let target = channel.index() as usize;
        let mut out = self.create_template().try_into_mut().unwrap();
        for (opx, px) in out
            .data_mut()
            .chunks_exact_mut(3)
            .zip(self.data().chunks_exact(3))
        {
            for c in 0..3 {
                let factor = if c == target { channel_factor } else { others_factor };
                opx[c] = (px[c] as f32 * factor).round().clamp(0.0, 255.0) as u8;
            }
        }
        Ok(out.into())
    }
}

#[cfg(test)]
mod tests {
    use crate::{ChannelCount, Error, PixelBuffer, RgbChannel};

    #[test]
    fn test_to_gray_weights() {
        let buf =
            PixelBuffer::from_vec(1, 1, ChannelCount::Rgb, vec![100, 200, 50]).unwrap();
        let gray = buf.to_gray();
        assert_eq!(gray.channels(), ChannelCount::Gray);
        // 100*0.3 + 200*0.5 + 50*0.2 = 140
        assert_eq!(gray.sample(0, 0, 0).unwrap(), 140);
    }

    #[test]
    fn test_to_gray_lossless_for_gray() {
        let buf = PixelBuffer::from_vec(2, 1, ChannelCount::Gray, vec![13, 200]).unwrap();
        let gray = buf.to_gray();
        assert_eq!(gray.data(), buf.data());
    }

    #[test]
    fn test_invert() {
        let buf = PixelBuffer::from_vec(2, 1, ChannelCount::Gray, vec![0, 200]).unwrap();
        let neg = buf.invert();
        assert_eq!(neg.data(), &[255, 55]);
        // Double inversion restores the original
        assert_eq!(neg.invert().data(), buf.data());
    }

    #[test]
    fn test_threshold() {
        let buf =
            PixelBuffer::from_vec(4, 1, ChannelCount::Gray, vec![0, 127, 128, 255]).unwrap();
        let bin = buf.threshold(128);
        assert_eq!(bin.data(), &[0, 0, 255, 255]);
    }

    #[test]
    fn test_scale_channel_isolate() {
        let buf =
            PixelBuffer::from_vec(1, 1, ChannelCount::Rgb, vec![100, 150, 200]).unwrap();
        let red_only = buf.scale_channel(RgbChannel::Red, 1.0, 0.0).unwrap();
        assert_eq!(red_only.get(0, 0).unwrap(), &[100, 0, 0]);
    }

    #[test]
    fn test_scale_channel_boost_clamps() {
        let buf =
            PixelBuffer::from_vec(1, 1, ChannelCount::Rgb, vec![100, 150, 200]).unwrap();
        let boosted = buf.scale_channel(RgbChannel::Blue, 2.0, 1.0).unwrap();
        assert_eq!(boosted.get(0, 0).unwrap(), &[100, 150, 255]);
    }

    #[test]
    fn test_scale_channel_rejects_gray() {
        let buf = PixelBuffer::new(2, 2, ChannelCount::Gray);
        assert!(matches!(
            buf.scale_channel(RgbChannel::Red, 1.0, 0.0),
            Err(Error::UnsupportedChannelCount(1))
        ));
    }

    #[test]
    fn test_scale_channel_rejects_negative_factor() {
        let buf = PixelBuffer::new(2, 2, ChannelCount::Rgb);
        assert!(matches!(
            buf.scale_channel(RgbChannel::Red, -1.0, 0.0),
            Err(Error::InvalidParameter(_))
        ));
    }
}
