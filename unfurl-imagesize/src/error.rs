// ABOUTME: Error type for image signature classification and header parsing
// ABOUTME: Distinguishes unknown formats from buffers too short to classify

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ImageSizeError {
    /// The signature bytes do not match any supported format, or a JPEG
    /// buffer failed structural validation (missing SOI/APP0 or JFIF tag).
    #[error("unsupported or unrecognized image format")]
    UnsupportedFormat,

    /// Fewer than the two bytes needed to read a signature. Callers must
    /// collect at least two bytes before classifying.
    #[error("not enough data to classify the image format")]
    InsufficientData,
}
