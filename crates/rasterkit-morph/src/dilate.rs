//! Morphological dilation
//!
//! Grows foreground regions by stamping the structuring element's
//! footprint at every foreground pixel.

use crate::{MorphError, MorphResult, StructElement};
use rasterkit_core::{ChannelCount, PixelBuffer};

/// Dilate a single-channel buffer with a structuring element.
///
/// Starting from an all-zero canvas of the same shape, every interior
/// source pixel with intensity > 0 stamps the full element footprint
/// onto the output centered at that pixel, zeros included. Interior
/// pixels are scanned in row-major order (x varies fastest), and a later
/// stamp overwrites an earlier one wherever footprints overlap. This
/// last-writer-wins rule in scan order is part of the contract, not an
/// artifact: callers may rely on it bit for bit.
///
/// Border pixels are never scanned, so foreground on the border
/// produces no stamp; stamps centered near the interior edge may still
/// write into the border band. Cells no stamp reaches keep the canvas
/// zero. The input buffer is never mutated.
///
/// # Errors
///
/// Returns [`MorphError::UnsupportedChannels`] for RGB input; the
/// foreground test is an intensity comparison and is only defined on
/// single-channel data.
pub fn dilate(buffer: &PixelBuffer, element: &StructElement) -> MorphResult<PixelBuffer> {
    check_gray(buffer)?;

    let w = buffer.width();
    let h = buffer.height();
    let size = element.size();
    let o = element.offset();

    let mut out = buffer.create_template().try_into_mut().unwrap();

    // Interior empty: nothing to scan, the zero canvas is the result.
    if w < size || h < size {
        return Ok(out.into());
    }

    // Stamp values share the convolution write policy: round, clamp to 8 bits.
    let stamp: Vec<u8> = element
        .data()
        .iter()
        .map(|&v| v.round().clamp(0.0, 255.0) as u8)
        .collect();

    for y in o..(h - o) {
        for x in o..(w - o) {
            if buffer.sample_unchecked(x, y, 0) == 0 {
                continue;
            }
            for b in 0..size {
                for a in 0..size {
                    out.set_sample_unchecked(
                        x + a - o,
                        y + b - o,
                        0,
                        stamp[(b * size + a) as usize],
                    );
                }
            }
        }
    }

    Ok(out.into())
}

fn check_gray(buffer: &PixelBuffer) -> MorphResult<()> {
    if buffer.channels() != ChannelCount::Gray {
        return Err(MorphError::UnsupportedChannels {
            expected: "1 (grayscale)",
            actual: buffer.channels().count(),
        });
    }
    Ok(())
}
