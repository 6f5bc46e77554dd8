// ABOUTME: Preview record value types built incrementally by the orchestrator
// ABOUTME: Immutable image entries with a distinct-source-URL invariant

use serde::Serialize;
use unfurl_imagesize::Dimensions;
use url::Url;

/// A resolved image: where it came from and how large its frame is.
///
/// Created once at successful parse completion and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageInfo {
    pub url: Url,
    pub dimensions: Dimensions,
}

impl ImageInfo {
    pub fn new(url: Url, dimensions: Dimensions) -> Self {
        Self { url, dimensions }
    }
}

/// The normalized preview of a fetched resource.
///
/// Fields are filled in as each pipeline stage succeeds: `url` once the
/// request URL parses, `title`/`description` from the Open Graph scan,
/// `images` from the secondary dimension probe. Absent values stay at
/// their defaults (empty strings, empty list) rather than failing the
/// record.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PreviewRecord {
    pub url: Option<Url>,
    pub title: String,
    pub description: String,
    pub images: Vec<ImageInfo>,
}

impl PreviewRecord {
    pub fn new(url: Url) -> Self {
        Self {
            url: Some(url),
            ..Self::default()
        }
    }

    /// Append a probed image, keeping entries distinct by source URL.
    /// A duplicate probe result for a URL already present is dropped.
    pub fn push_image(&mut self, image: ImageInfo) {
        if self.images.iter().any(|existing| existing.url == image.url) {
            return;
        }
        self.images.push(image);
    }

    /// Legacy single-image view: the first probed image, if any.
    pub fn primary_image(&self) -> Option<&ImageInfo> {
        self.images.first()
    }
}
