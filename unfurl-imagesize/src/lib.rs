// ABOUTME: Header-level image dimension probing for partially downloaded data
// ABOUTME: Sniffs JPEG/PNG/GIF/BMP signatures and extracts width/height without decoding

//! Extract pixel dimensions from the first bytes of an image file.
//!
//! This crate never decodes pixel data. It classifies a buffer by its
//! signature bytes and reads width/height straight out of the format's
//! header, which makes it suitable for probing partially downloaded
//! files: when the buffer does not yet contain the header fields, the
//! parser answers [`Ok(None)`](extract_dimensions) instead of failing,
//! and the caller can fetch more bytes and try again.
//!
//! ```
//! use unfurl_imagesize::{image_dimensions, Dimensions};
//!
//! let mut png = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
//! png.extend_from_slice(&13u32.to_be_bytes());
//! png.extend_from_slice(b"IHDR");
//! png.extend_from_slice(&800u32.to_be_bytes());
//! png.extend_from_slice(&600u32.to_be_bytes());
//! png.extend_from_slice(&[0; 8]);
//!
//! let dims = image_dimensions(&png).unwrap();
//! assert_eq!(dims, Some(Dimensions::new(800, 600)));
//! ```

mod dimensions;
mod error;
mod format;
mod parser;

pub use dimensions::Dimensions;
pub use error::ImageSizeError;
pub use format::ImageFormat;
pub use parser::extract_dimensions;

/// Classify `data` by its signature bytes and extract the frame dimensions.
///
/// Returns `Ok(None)` when the buffer is a recognized format but does not
/// yet contain enough bytes to reach the header fields.
pub fn image_dimensions(data: &[u8]) -> Result<Option<Dimensions>, ImageSizeError> {
    let format = ImageFormat::classify(data)?;
    extract_dimensions(format, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_and_extracts_in_one_call() {
        let mut gif = b"GIF89a".to_vec();
        gif.extend_from_slice(&320u16.to_le_bytes());
        gif.extend_from_slice(&240u16.to_le_bytes());
        gif.extend_from_slice(&[0; 4]);

        let dims = image_dimensions(&gif).unwrap();
        assert_eq!(dims, Some(Dimensions::new(320, 240)));
    }

    #[test]
    fn rejects_unknown_signatures() {
        let err = image_dimensions(b"<html></html>").unwrap_err();
        assert!(matches!(err, ImageSizeError::UnsupportedFormat));
    }
}
