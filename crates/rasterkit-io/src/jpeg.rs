//! JPEG image format support

use crate::{IoError, IoResult};
use jpeg_decoder::PixelFormat;
use jpeg_encoder::{ColorType, Encoder};
use rasterkit_core::{ChannelCount, PixelBuffer};
use std::io::{Read, Write};

/// Encoding quality for written JPEG files (0-100).
const JPEG_QUALITY: u8 = 90;

/// Read a JPEG image into a pixel buffer.
///
/// 8-bit grayscale and RGB streams are supported; CMYK and 16-bit
/// grayscale are not.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<PixelBuffer> {
    let mut decoder = jpeg_decoder::Decoder::new(reader);
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {e}")))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("missing JPEG header info".to_string()))?;

    let channels = match info.pixel_format {
        PixelFormat::L8 => ChannelCount::Gray,
        PixelFormat::RGB24 => ChannelCount::Rgb,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported JPEG pixel format: {other:?}"
            )));
        }
    };

    Ok(PixelBuffer::from_vec(
        info.width as u32,
        info.height as u32,
        channels,
        pixels,
    )?)
}

/// Write a pixel buffer as a JPEG file.
pub fn write_jpeg<W: Write>(mut writer: W, buffer: &PixelBuffer) -> IoResult<()> {
    let width = u16::try_from(buffer.width())
        .map_err(|_| IoError::EncodeError("image too wide for JPEG".to_string()))?;
    let height = u16::try_from(buffer.height())
        .map_err(|_| IoError::EncodeError("image too tall for JPEG".to_string()))?;

    let color_type = match buffer.channels() {
        ChannelCount::Gray => ColorType::Luma,
        ChannelCount::Rgb => ColorType::Rgb,
    };

    let mut encoded = Vec::new();
    let encoder = Encoder::new(&mut encoded, JPEG_QUALITY);
    encoder
        .encode(buffer.data(), width, height, color_type)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {e}")))?;

    writer.write_all(&encoded)?;
    Ok(())
}
