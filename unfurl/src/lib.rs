// ABOUTME: Link unfurling client: Open Graph previews with minimal-byte image probing
// ABOUTME: Orchestrates the page fetch, OG scan, and conditional ranged image fetch

//! Build a normalized preview of a URL while fetching as few bytes as
//! possible.
//!
//! [`UnfurlClient::generate_preview`] fetches the URL once, dispatches on
//! the response `Content-Type`, and either probes the resource itself as
//! an image or scans the HTML for Open Graph tags and chains a secondary
//! byte-range fetch of the discovered `og:image`. Image dimensions come
//! from header-level parsing ([`unfurl_imagesize`]) — pixel data is never
//! decoded.
//!
//! ```no_run
//! # async fn run() -> Result<(), unfurl::UnfurlError> {
//! let client = unfurl::UnfurlClient::builder().build()?;
//! let preview = client.generate_preview("https://example.com/article").await?;
//! println!("{}: {} image(s)", preview.title, preview.images.len());
//! # Ok(())
//! # }
//! ```
//!
//! Cancellation is drop-based: abandoning the future returned by
//! [`generate_preview`](UnfurlClient::generate_preview) aborts whichever
//! of the two sequential fetches is in flight. Concurrent previews are
//! independent and share only the fetcher's connection pool.

mod builder;
mod constants;
mod error;
mod fetcher;
mod preview;
mod probe;
mod scanner;
#[cfg(test)]
mod test_helpers;

pub use builder::UnfurlClientConfig;
pub use error::UnfurlError;
pub use fetcher::{ByteRange, FetchResponse, Fetcher, HttpFetcher};
pub use preview::{ImageInfo, PreviewRecord};
pub use probe::RangePolicy;
pub use scanner::{scan, MetadataField};
// The standalone probe surface, for callers that already hold image bytes.
pub use unfurl_imagesize::{extract_dimensions, image_dimensions, Dimensions, ImageFormat};

use crate::constants::http;
use std::sync::Arc;
use url::Url;

/// The unfurling orchestrator.
///
/// Holds the network collaborator and the byte-range policy; cheap to
/// clone and safe to share across tasks.
#[derive(Clone)]
pub struct UnfurlClient {
    fetcher: Arc<dyn Fetcher>,
    range_policy: RangePolicy,
}

impl UnfurlClient {
    pub(crate) fn from_config(config: UnfurlClientConfig) -> Result<Self, UnfurlError> {
        let mut client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .redirect(reqwest::redirect::Policy::limited(http::MAX_REDIRECTS));
        if let Some(proxy) = config.proxy {
            client = client.proxy(proxy);
        }
        let client = client
            .build()
            .map_err(|e| UnfurlError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            fetcher: Arc::new(HttpFetcher::new(client)),
            range_policy: config.range_policy,
        })
    }

    /// Construct a client over a custom transport — a different HTTP
    /// stack, or a test double. There is no implicit global session.
    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>, range_policy: RangePolicy) -> Self {
        Self {
            fetcher,
            range_policy,
        }
    }

    /// Fetch `url` and compose its preview record.
    ///
    /// HTML responses contribute title/description (and, via `og:image`,
    /// a secondary ranged fetch); image responses are probed directly.
    /// A failure in the secondary image stage is logged and swallowed —
    /// the already-collected metadata is returned rather than discarded.
    /// The whole preview fails only when the primary fetch fails, the
    /// response cannot be classified, or an HTML body is not UTF-8.
    pub async fn generate_preview(&self, url: &str) -> Result<PreviewRecord, UnfurlError> {
        let url = Url::parse(url)?;

        let response = self.fetcher.fetch(&url, None).await?;
        let content_type = response.content_type.ok_or(UnfurlError::NoContentType)?;

        let mut record = PreviewRecord::new(url.clone());
        let image_url = if content_type.starts_with("image") {
            Some(url.clone())
        } else if content_type.starts_with("text/html") {
            let html = std::str::from_utf8(&response.body).map_err(|_| UnfurlError::Encoding)?;
            let fields = scanner::scan(html);

            if let Some(title) = fields.get(&MetadataField::Title) {
                record.title = title.clone();
            }
            if let Some(description) = fields.get(&MetadataField::Description) {
                record.description = description.clone();
            }

            fields
                .get(&MetadataField::Image)
                .and_then(|raw| match url.join(raw) {
                    Ok(resolved) => Some(resolved),
                    Err(err) => {
                        tracing::debug!(raw = %raw, error = %err, "og:image is not a resolvable URL");
                        None
                    }
                })
        } else {
            return Err(UnfurlError::UnsupportedContentType(content_type));
        };

        if let Some(image_url) = image_url {
            match probe::probe_image(self.fetcher.as_ref(), &self.range_policy, &image_url).await {
                Ok(info) => record.push_image(info),
                Err(err) if err.is_secondary_recoverable() => {
                    tracing::warn!(
                        %image_url,
                        error = %err,
                        "image probe failed; returning metadata-only preview"
                    );
                }
                Err(err) => return Err(err),
            }
        }

        Ok(record)
    }
}
