//! PNG image format support

use crate::{IoError, IoResult};
use rasterkit_core::{ChannelCount, PixelBuffer};
use png::{BitDepth, ColorType, Decoder, Encoder};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image into a pixel buffer.
///
/// Grayscale decodes to a single-channel buffer, RGB to three channels.
/// Alpha channels are dropped on decode; the buffer model carries
/// opaque samples only.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<PixelBuffer> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {e}")))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {e}")))?;

    if info.bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG bit depth: {:?}",
            info.bit_depth
        )));
    }

    let width = info.width;
    let height = info.height;
    let data = &buf[..info.buffer_size()];
    let line_size = info.line_size;

    let (channels, src_step) = match info.color_type {
        ColorType::Grayscale => (ChannelCount::Gray, 1),
        ColorType::GrayscaleAlpha => (ChannelCount::Gray, 2),
        ColorType::Rgb => (ChannelCount::Rgb, 3),
        ColorType::Rgba => (ChannelCount::Rgb, 4),
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG color type: {other:?}"
            )));
        }
    };

    let keep = channels.count() as usize;
    let mut samples = Vec::with_capacity(width as usize * height as usize * keep);
    for y in 0..height as usize {
        let row = &data[y * line_size..y * line_size + width as usize * src_step];
        for px in row.chunks_exact(src_step) {
            samples.extend_from_slice(&px[..keep]);
        }
    }

    Ok(PixelBuffer::from_vec(width, height, channels, samples)?)
}

/// Write a pixel buffer as an 8-bit PNG.
pub fn write_png<W: Write>(writer: W, buffer: &PixelBuffer) -> IoResult<()> {
    let color_type = match buffer.channels() {
        ChannelCount::Gray => ColorType::Grayscale,
        ChannelCount::Rgb => ColorType::Rgb,
    };

    let mut encoder = Encoder::new(writer, buffer.width(), buffer.height());
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {e}")))?;
    png_writer
        .write_image_data(buffer.data())
        .map_err(|e| IoError::EncodeError(format!("PNG encode error: {e}")))?;
    Ok(())
}
