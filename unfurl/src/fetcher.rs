// ABOUTME: Network collaborator trait with byte-range support and reqwest default
// ABOUTME: Implementations must abort the transfer when the fetch future is dropped

use async_trait::async_trait;
use std::fmt;
use url::Url;

use crate::constants::http;
use crate::error::UnfurlError;

/// An inclusive HTTP byte range, rendered as `bytes=<start>-<end>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
}

impl ByteRange {
    /// The first `len` bytes of a resource.
    pub fn head(len: u64) -> Self {
        Self {
            start: 0,
            end: len.saturating_sub(1),
        }
    }

    /// Number of bytes the range asks for. A range is never empty.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }

    pub fn header_value(&self) -> String {
        format!("bytes={}-{}", self.start, self.end)
    }
}

impl fmt::Display for ByteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.header_value())
    }
}

/// Raw response handed back by a [`Fetcher`].
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub body: Vec<u8>,
    /// The `Content-Type` header, verbatim, if the server sent one.
    pub content_type: Option<String>,
}

/// The network collaborator consumed by the orchestrator.
///
/// `range: None` fetches the resource in full; `Some(range)` asks the
/// server for only that byte span (servers that ignore `Range` and reply
/// with the whole body are fine — callers parse whatever arrives).
///
/// Cancellation contract: dropping the future returned by `fetch` must
/// abort the underlying transfer so that an abandoned preview causes no
/// further network activity. The reqwest-backed default honors this.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &Url, range: Option<ByteRange>)
        -> Result<FetchResponse, UnfurlError>;
}

/// Default [`Fetcher`] over a shared reqwest client (connection pool
/// reuse across both pipeline stages and across concurrent previews).
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(
        &self,
        url: &Url,
        range: Option<ByteRange>,
    ) -> Result<FetchResponse, UnfurlError> {
        let mut request = self.client.get(url.clone());
        if let Some(range) = range {
            request = request.header(reqwest::header::RANGE, range.header_value());
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(UnfurlError::Network {
                message: format!("{url} answered {status}"),
                source: None,
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        if let Some(length) = response.content_length() {
            if length > http::MAX_BODY_BYTES {
                return Err(UnfurlError::Network {
                    message: format!("{url} body of {length} bytes exceeds the fetch cap"),
                    source: None,
                });
            }
        }

        let body = response.bytes().await?.to_vec();
        Ok(FetchResponse {
            body,
            content_type,
        })
    }
}
