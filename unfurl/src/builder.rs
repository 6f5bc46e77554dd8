// ABOUTME: Builder pattern for UnfurlClient configuration
// ABOUTME: Type-safe defaults for transport settings and the probe range policy

use crate::constants::http;
use crate::error::UnfurlError;
use crate::probe::RangePolicy;
use crate::UnfurlClient;
use std::time::Duration;
use typed_builder::TypedBuilder;
use url::Url;

#[derive(Debug, TypedBuilder)]
#[builder(build_method(into = Result<UnfurlClient, UnfurlError>))]
pub struct UnfurlClientConfig {
    #[builder(default = http::REQUEST_TIMEOUT)]
    pub timeout: Duration,

    #[builder(default = http::USER_AGENT.to_string(), setter(into))]
    pub user_agent: String,

    #[builder(default = None)]
    pub proxy: Option<reqwest::Proxy>,

    #[builder(default)]
    pub range_policy: RangePolicy,
}

impl From<UnfurlClientConfig> for Result<UnfurlClient, UnfurlError> {
    fn from(config: UnfurlClientConfig) -> Self {
        UnfurlClient::from_config(config)
    }
}

impl UnfurlClient {
    pub fn builder() -> UnfurlClientConfigBuilder<((), (), (), ())> {
        UnfurlClientConfig::builder()
    }

    /// Validate a proxy URL and turn it into a reqwest proxy.
    pub fn create_proxy(url: &str) -> Result<reqwest::Proxy, UnfurlError> {
        let parsed = Url::parse(url)
            .map_err(|e| UnfurlError::Configuration(format!("invalid proxy URL: {e}")))?;

        reqwest::Proxy::all(parsed.as_str())
            .map_err(|e| UnfurlError::Configuration(format!("invalid proxy configuration: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_defaults() {
        let client = UnfurlClient::builder().build();
        assert!(client.is_ok());
    }

    #[test]
    fn builds_with_all_options() {
        let client = UnfurlClient::builder()
            .timeout(Duration::from_secs(5))
            .user_agent("previewbot/2.0")
            .range_policy(RangePolicy {
                max_attempts: 2,
                ..RangePolicy::default()
            })
            .build();
        assert!(client.is_ok());
    }

    #[test]
    fn rejects_invalid_proxy_url() {
        let result = UnfurlClient::create_proxy("not-a-url");
        match result {
            Err(UnfurlError::Configuration(msg)) => assert!(msg.contains("invalid proxy URL")),
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_valid_proxy() {
        let proxy = UnfurlClient::create_proxy("http://proxy:8080").unwrap();
        let client = UnfurlClient::builder().proxy(Some(proxy)).build();
        assert!(client.is_ok());
    }
}
