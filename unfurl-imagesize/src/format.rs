// ABOUTME: Image format classification from leading signature bytes
// ABOUTME: Carries each format's minimum sample size for partial-buffer parsing

use crate::error::ImageSizeError;

pub const JPEG_SIGNATURE: u16 = 0xFFD8;
pub const PNG_SIGNATURE: u16 = 0x8950;
pub const GIF_SIGNATURE: u16 = 0x4749;
pub const BMP_SIGNATURE: u16 = 0x424D;

/// Supported image formats, recognized by their first two bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
    Bmp,
}

impl ImageFormat {
    /// Classify a buffer from its signature bytes.
    ///
    /// Requires at least two bytes; pure and side-effect free.
    pub fn classify(data: &[u8]) -> Result<Self, ImageSizeError> {
        if data.len() < 2 {
            return Err(ImageSizeError::InsufficientData);
        }
        match u16::from_be_bytes([data[0], data[1]]) {
            JPEG_SIGNATURE => Ok(ImageFormat::Jpeg),
            PNG_SIGNATURE => Ok(ImageFormat::Png),
            GIF_SIGNATURE => Ok(ImageFormat::Gif),
            BMP_SIGNATURE => Ok(ImageFormat::Bmp),
            _ => Err(ImageSizeError::UnsupportedFormat),
        }
    }

    /// Minimum number of bytes that must be collected before the header
    /// fields are guaranteed to be present.
    ///
    /// `None` means the format has no fixed header offset (JPEG's
    /// variable-length marker chain) and a parse must always be attempted.
    pub const fn minimum_sample(self) -> Option<usize> {
        match self {
            ImageFormat::Jpeg => None,
            ImageFormat::Png => Some(25),
            ImageFormat::Gif => Some(11),
            ImageFormat::Bmp => Some(29),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_all_four_signatures() {
        assert_eq!(
            ImageFormat::classify(&[0xFF, 0xD8, 0xFF]).unwrap(),
            ImageFormat::Jpeg
        );
        assert_eq!(
            ImageFormat::classify(&[0x89, 0x50, 0x4E, 0x47]).unwrap(),
            ImageFormat::Png
        );
        assert_eq!(ImageFormat::classify(b"GIF89a").unwrap(), ImageFormat::Gif);
        assert_eq!(ImageFormat::classify(b"BM\x00\x00").unwrap(), ImageFormat::Bmp);
    }

    #[test]
    fn rejects_unknown_prefix() {
        assert_eq!(
            ImageFormat::classify(&[0x00, 0x01]),
            Err(ImageSizeError::UnsupportedFormat)
        );
        assert_eq!(
            ImageFormat::classify(b"RIFF"),
            Err(ImageSizeError::UnsupportedFormat)
        );
    }

    #[test]
    fn requires_two_bytes() {
        assert_eq!(
            ImageFormat::classify(&[0xFF]),
            Err(ImageSizeError::InsufficientData)
        );
        assert_eq!(ImageFormat::classify(&[]), Err(ImageSizeError::InsufficientData));
    }

    #[test]
    fn minimum_samples_match_header_layouts() {
        assert_eq!(ImageFormat::Jpeg.minimum_sample(), None);
        assert_eq!(ImageFormat::Png.minimum_sample(), Some(25));
        assert_eq!(ImageFormat::Gif.minimum_sample(), Some(11));
        assert_eq!(ImageFormat::Bmp.minimum_sample(), Some(29));
    }
}
