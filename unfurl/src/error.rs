// ABOUTME: Error type for the unfurl pipeline with transport conversions
// ABOUTME: Classifies which failures may be swallowed by the secondary image stage

use thiserror::Error;
use unfurl_imagesize::ImageSizeError;
use url::Url;

#[derive(Debug, Error)]
pub enum UnfurlError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("request timed out")]
    Timeout,

    #[error("response carried no Content-Type header")]
    NoContentType,

    #[error("response body is not valid UTF-8")]
    Encoding,

    #[error("content type {0:?} is neither HTML nor an image")]
    UnsupportedContentType(String),

    #[error("unsupported or unrecognized image format")]
    UnsupportedFormat,

    #[error("could not collect enough of {url} to determine its dimensions")]
    IncompleteImage { url: Url },

    #[error("configuration error: {0}")]
    Configuration(String),
}

impl UnfurlError {
    /// Failures in the secondary image fetch that must not discard the
    /// already-collected title/description. Only a primary fetch failure
    /// or an unclassifiable response fails the whole preview.
    pub fn is_secondary_recoverable(&self) -> bool {
        matches!(
            self,
            UnfurlError::Network { .. }
                | UnfurlError::Timeout
                | UnfurlError::UnsupportedFormat
                | UnfurlError::IncompleteImage { .. }
        )
    }
}

impl From<reqwest::Error> for UnfurlError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UnfurlError::Timeout
        } else {
            UnfurlError::Network {
                message: err.to_string(),
                source: Some(Box::new(err)),
            }
        }
    }
}

impl From<ImageSizeError> for UnfurlError {
    fn from(err: ImageSizeError) -> Self {
        match err {
            ImageSizeError::UnsupportedFormat => UnfurlError::UnsupportedFormat,
            // A body too short to even classify is a starved transfer,
            // not an unknown format; the probe surfaces it per-URL.
            ImageSizeError::InsufficientData => UnfurlError::Network {
                message: "response body shorter than an image signature".to_string(),
                source: None,
            },
        }
    }
}
