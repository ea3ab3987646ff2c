//! Kernel convolution
//!
//! Weighted-sum neighborhood processing over a [`StructElement`]. Every
//! interior output pixel is the element-weighted sum of its source
//! window, computed per channel; the border band keeps the zero value
//! of the output canvas.

use crate::{FilterError, FilterResult};
use rasterkit_core::{ChannelCount, PixelBuffer};
use rasterkit_morph::StructElement;

/// Kernel sums closer to zero than this are treated as zero and skip
/// normalization.
const NEAR_ZERO_SUM: f32 = 1e-6;

/// Convolve a single-channel buffer with a kernel.
///
/// # Errors
///
/// Returns [`FilterError::UnsupportedChannels`] for RGB input.
pub fn convolve_gray(buffer: &PixelBuffer, element: &StructElement) -> FilterResult<PixelBuffer> {
    if buffer.channels() != ChannelCount::Gray {
        return Err(FilterError::UnsupportedChannels {
            expected: "1 (grayscale)",
            actual: buffer.channels().count(),
        });
    }
    Ok(convolve_impl(buffer, element))
}

/// Convolve an RGB buffer with a kernel, each channel independently.
///
/// # Errors
///
/// Returns [`FilterError::UnsupportedChannels`] for grayscale input.
pub fn convolve_rgb(buffer: &PixelBuffer, element: &StructElement) -> FilterResult<PixelBuffer> {
    if buffer.channels() != ChannelCount::Rgb {
        return Err(FilterError::UnsupportedChannels {
            expected: "3 (RGB)",
            actual: buffer.channels().count(),
        });
    }
    Ok(convolve_impl(buffer, element))
}

/// Convolve a buffer with a kernel (auto-dispatch on channel layout).
///
/// For every interior pixel and every channel the raw weighted sum over
/// the kernel window is computed, then divided by the kernel sum when
/// that sum is meaningfully non-zero. Averaging kernels therefore
/// preserve overall brightness, while zero-sum kernels (such as the
/// Laplacian) pass their raw derivative signal through. The final value
/// is rounded and clamped into 0..=255; results never wrap.
///
/// The border band, where the kernel window would leave the buffer, is
/// never computed and keeps the output canvas zero. The input buffer is
/// never mutated.
pub fn convolve(buffer: &PixelBuffer, element: &StructElement) -> FilterResult<PixelBuffer> {
    match buffer.channels() {
        ChannelCount::Gray => convolve_gray(buffer, element),
        ChannelCount::Rgb => convolve_rgb(buffer, element),
    }
}

fn convolve_impl(buffer: &PixelBuffer, element: &StructElement) -> PixelBuffer {
    let w = buffer.width();
    let h = buffer.height();
    let channels = buffer.channels().count();
    let size = element.size();
    let o = element.offset();

    let mut out = buffer.create_template().try_into_mut().unwrap();

    if w < size || h < size {
        return out.into();
    }

    let weights = element.data();
    let ksum = element.sum();
    let norm = if ksum.abs() > NEAR_ZERO_SUM {
        1.0 / ksum
    } else {
        1.0
    };

    for y in o..(h - o) {
        for x in o..(w - o) {
            for c in 0..channels {
                let mut raw = 0.0f32;
                for b in 0..size {
                    for a in 0..size {
                        let sample = buffer.sample_unchecked(x + a - o, y + b - o, c);
                        raw += sample as f32 * weights[(b * size + a) as usize];
                    }
                }
                let val = (raw * norm).round().clamp(0.0, 255.0) as u8;
                out.set_sample_unchecked(x, y, c, val);
            }
        }
    }

    out.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterkit_morph::MorphResult;

    fn uniform_gray(width: u32, height: u32, fill: u8) -> PixelBuffer {
        PixelBuffer::from_vec(
            width,
            height,
            ChannelCount::Gray,
            vec![fill; (width * height) as usize],
        )
        .unwrap()
    }

    fn box_kernel(size: u32) -> MorphResult<StructElement> {
        StructElement::from_matrix(size, &vec![1.0; (size * size) as usize])
    }

    #[test]
    fn test_normalization_preserves_brightness() {
        let src = uniform_gray(5, 5, 100);
        let kernel = box_kernel(3).unwrap();

        let out = convolve(&src, &kernel).unwrap();

        // Interior: raw sum 9 * 100 = 900, divided by the kernel sum 9
        for y in 1..4 {
            for x in 1..4 {
                assert_eq!(out.sample(x, y, 0).unwrap(), 100);
            }
        }
    }

    #[test]
    fn test_border_band_stays_zero() {
        let src = uniform_gray(5, 5, 100);
        let kernel = box_kernel(3).unwrap();

        let out = convolve(&src, &kernel).unwrap();

        for x in 0..5 {
            assert_eq!(out.sample(x, 0, 0).unwrap(), 0);
            assert_eq!(out.sample(x, 4, 0).unwrap(), 0);
        }
        for y in 0..5 {
            assert_eq!(out.sample(0, y, 0).unwrap(), 0);
            assert_eq!(out.sample(4, y, 0).unwrap(), 0);
        }
    }

    #[test]
    fn test_laplacian_clamps_spike() {
        // Lone 255 spike at the center of a black field
        let mut src = PixelBuffer::new(5, 5, ChannelCount::Gray)
            .try_into_mut()
            .unwrap();
        src.set_sample(2, 2, 0, 255).unwrap();
        let src: PixelBuffer = src.into();

        let lap = StructElement::create_laplacian();
        let out = convolve(&src, &lap).unwrap();

        // Zero-sum kernel: no normalization. At the spike the raw sum is
        // 8 * 255 = 2040, clamped to 255; beside it the spike lands on a
        // -1 weight, raw sum -255, clamped to 0.
        assert_eq!(out.sample(2, 2, 0).unwrap(), 255);
        assert_eq!(out.sample(1, 2, 0).unwrap(), 0);
        assert_eq!(out.sample(2, 1, 0).unwrap(), 0);
        assert_eq!(out.sample(1, 1, 0).unwrap(), 0);
    }

    #[test]
    fn test_laplacian_flat_field_is_zero() {
        // Constant input has no edges; the zero-sum kernel cancels exactly
        let src = uniform_gray(6, 6, 140);
        let lap = StructElement::create_laplacian();
        let out = convolve(&src, &lap).unwrap();
        assert!(out.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_identity_kernel() {
        let src = PixelBuffer::from_vec(
            3,
            2,
            ChannelCount::Gray,
            vec![10, 20, 30, 40, 50, 60],
        )
        .unwrap();
        let identity = StructElement::from_matrix(1, &[1.0]).unwrap();

        // Size-1 kernel: the interior is the whole buffer, output == input
        let out = convolve(&src, &identity).unwrap();
        assert_eq!(out.data(), src.data());
    }

    #[test]
    fn test_rgb_channels_independent() {
        let src = PixelBuffer::from_vec(
            3,
            3,
            ChannelCount::Rgb,
            [10u8, 20, 30].repeat(9),
        )
        .unwrap();
        let kernel = box_kernel(3).unwrap();

        let out = convolve(&src, &kernel).unwrap();

        assert_eq!(out.channels(), ChannelCount::Rgb);
        assert_eq!(out.get(1, 1).unwrap(), &[10, 20, 30]);
        // Border pixel untouched
        assert_eq!(out.get(0, 0).unwrap(), &[0, 0, 0]);
    }

    #[test]
    fn test_shape_preserved_and_input_untouched() {
        let src = uniform_gray(7, 4, 33);
        let before: Vec<u8> = src.data().to_vec();
        let kernel = box_kernel(3).unwrap();

        let out = convolve(&src, &kernel).unwrap();

        assert!(out.same_shape(&src));
        assert_eq!(src.data(), &before[..]);
    }

    #[test]
    fn test_element_larger_than_buffer() {
        let src = uniform_gray(2, 2, 250);
        let kernel = box_kernel(5).unwrap();
        let out = convolve(&src, &kernel).unwrap();
        assert!(out.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_layout_entry_points_reject_mismatch() {
        let gray = uniform_gray(4, 4, 0);
        let rgb = PixelBuffer::new(4, 4, ChannelCount::Rgb);
        let kernel = box_kernel(3).unwrap();

        assert!(matches!(
            convolve_gray(&rgb, &kernel),
            Err(FilterError::UnsupportedChannels { actual: 3, .. })
        ));
        assert!(matches!(
            convolve_rgb(&gray, &kernel),
            Err(FilterError::UnsupportedChannels { actual: 1, .. })
        ));
    }
}
