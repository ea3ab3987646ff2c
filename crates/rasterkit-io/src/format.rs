//! Image file format identification
//!
//! Formats are sniffed from magic bytes when reading and mapped from
//! the file extension when writing.

use crate::{IoError, IoResult};
use std::path::Path;

/// Supported image file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// PNG format
    Png,
    /// JFIF JPEG format
    Jpeg,
}

impl ImageFormat {
    /// Get the canonical file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }

    /// Determine the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::UnsupportedFormat`] when the path has no
    /// extension or an unrecognized one.
    pub fn from_path(path: &Path) -> IoResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            _ => Err(IoError::UnsupportedFormat(format!(
                "unrecognized extension on {}",
                path.display()
            ))),
        }
    }

    /// Sniff the format from the first bytes of an encoded image.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::UnsupportedFormat`] when no known signature
    /// matches.
    pub fn sniff(data: &[u8]) -> IoResult<Self> {
        if data.starts_with(&[0x89, b'P', b'N', b'G']) {
            return Ok(Self::Png);
        }
        if data.starts_with(&[0xFF, 0xD8]) {
            return Ok(Self::Jpeg);
        }
        Err(IoError::UnsupportedFormat(
            "no known image signature".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff() {
        assert_eq!(
            ImageFormat::sniff(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A]).unwrap(),
            ImageFormat::Png
        );
        assert_eq!(
            ImageFormat::sniff(&[0xFF, 0xD8, 0xFF, 0xE0]).unwrap(),
            ImageFormat::Jpeg
        );
        assert!(ImageFormat::sniff(b"GIF89a").is_err());
        assert!(ImageFormat::sniff(&[]).is_err());
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            ImageFormat::from_path(Path::new("a/tulips.JPG")).unwrap(),
            ImageFormat::Jpeg
        );
        assert_eq!(
            ImageFormat::from_path(Path::new("mask.png")).unwrap(),
            ImageFormat::Png
        );
        assert!(ImageFormat::from_path(Path::new("notes.txt")).is_err());
        assert!(ImageFormat::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn test_extension() {
        assert_eq!(ImageFormat::Png.extension(), "png");
        assert_eq!(ImageFormat::Jpeg.extension(), "jpg");
    }
}
