// ABOUTME: Ranged image probe: bounded fetch loop with a growing byte window
// ABOUTME: Converts persistent "need more data" answers into IncompleteImage

use url::Url;

use crate::constants::probe;
use crate::error::UnfurlError;
use crate::fetcher::{ByteRange, Fetcher};
use crate::preview::ImageInfo;
use unfurl_imagesize::{extract_dimensions, ImageFormat, ImageSizeError};

/// How much of an image to ask for, and how to grow the ask when the
/// dimension parser reports it needs more.
#[derive(Debug, Clone)]
pub struct RangePolicy {
    /// First window when the URL gives no format hint.
    pub initial_range: u64,
    /// First window when the URL's extension names a fixed-header format
    /// (PNG/GIF/BMP headers all fit in well under this).
    pub fixed_header_range: u64,
    /// Multiplier applied between attempts.
    pub growth_factor: u64,
    /// Largest window ever requested.
    pub max_range: u64,
    /// Total ranged fetches allowed per image URL.
    pub max_attempts: u32,
}

impl Default for RangePolicy {
    fn default() -> Self {
        Self {
            initial_range: probe::DEFAULT_INITIAL_RANGE,
            fixed_header_range: probe::FIXED_HEADER_RANGE,
            growth_factor: probe::RANGE_GROWTH_FACTOR,
            max_range: probe::MAX_RANGE,
            max_attempts: probe::MAX_ATTEMPTS,
        }
    }
}

impl RangePolicy {
    /// Pick the first window from the URL's file extension, when it names
    /// a format whose header sits at a fixed offset.
    fn initial_window(&self, url: &Url) -> u64 {
        let path = url.path().to_ascii_lowercase();
        if [".png", ".gif", ".bmp"]
            .iter()
            .any(|ext| path.ends_with(ext))
        {
            self.fixed_header_range
        } else {
            self.initial_range
        }
    }
}

/// Fetch just enough of `url` to determine its pixel dimensions.
///
/// Each attempt requests a head byte range, sniffs the format, and runs
/// the dimension parser. "Need more data" grows the window and retries;
/// a server that delivered the whole resource (body shorter than the
/// window) ends the loop immediately since growing cannot help. When the
/// attempt limit or byte cap runs out the starvation is surfaced as
/// [`UnfurlError::IncompleteImage`], distinct from an unknown format.
pub(crate) async fn probe_image(
    fetcher: &dyn Fetcher,
    policy: &RangePolicy,
    url: &Url,
) -> Result<ImageInfo, UnfurlError> {
    let mut window = policy.initial_window(url);

    for attempt in 1..=policy.max_attempts {
        let range = ByteRange::head(window);
        let response = fetcher.fetch(url, Some(range)).await?;
        let body = response.body.as_slice();

        let format = ImageFormat::classify(body).map_err(|err| match err {
            ImageSizeError::InsufficientData => UnfurlError::IncompleteImage { url: url.clone() },
            other => UnfurlError::from(other),
        })?;

        match extract_dimensions(format, body)? {
            Some(dimensions) => return Ok(ImageInfo::new(url.clone(), dimensions)),
            None => {
                if (body.len() as u64) < range.len() {
                    // The whole file arrived and still wasn't enough.
                    return Err(UnfurlError::IncompleteImage { url: url.clone() });
                }
                if window >= policy.max_range {
                    break;
                }
                window = (window.saturating_mul(policy.growth_factor)).min(policy.max_range);
                tracing::debug!(
                    %url,
                    attempt,
                    next_window = window,
                    "dimension parser needs more data; growing byte range"
                );
            }
        }
    }

    Err(UnfurlError::IncompleteImage { url: url.clone() })
}
