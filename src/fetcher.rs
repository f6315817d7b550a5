use crate::{MetadataSource, PreviewError};
use async_trait::async_trait;
use reqwest::{header::HeaderMap, Client};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, error};
use url::Url;

/// Default metadata-extraction service endpoint. The target URL is passed as
/// the `q` query parameter.
pub const METADATA_ENDPOINT: &str = "https://open-apis.hax.cloud/api/services/website/metadata";

/// Raw metadata field set returned by the extraction service for one URL.
///
/// Only the keys the card consumes are typed; everything else the service
/// returns lands in `extra` and is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetadataFields {
    #[serde(rename = "og:title")]
    pub og_title: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub logo: Option<String>,
    #[serde(rename = "og:image")]
    pub og_image: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "theme-color")]
    pub theme_color: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Service response envelope. A body without a `data` object is a parse
/// failure, matching the card's degraded-display policy.
#[derive(Debug, Deserialize)]
struct MetadataEnvelope {
    data: MetadataFields,
}

#[derive(Clone)]
pub struct MetadataFetcher {
    client: Client,
    endpoint: Url,
}

impl Default for MetadataFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataFetcher {
    pub fn new() -> Self {
        debug!("MetadataFetcher initialized with default configuration");
        Self::new_with_config(FetcherConfig::default())
    }

    pub fn new_with_config(config: FetcherConfig) -> Self {
        let endpoint = Url::parse(&config.endpoint).unwrap_or_else(|e| {
            error!(error = %e, endpoint = %config.endpoint, "Invalid metadata endpoint");
            panic!("Invalid metadata endpoint URL: {}", e);
        });

        let mut client_builder = Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .pool_max_idle_per_host(10);

        if let Some(headers) = config.headers {
            client_builder = client_builder.default_headers(headers);
        }

        if let Some(redirect_policy) = config.redirect_policy {
            client_builder = client_builder.redirect(redirect_policy);
        }

        let client = client_builder.build().unwrap_or_else(|e| {
            error!(error = %e, "Failed to create HTTP client");
            panic!("Failed to initialize HTTP client: {}", e);
        });

        Self { client, endpoint }
    }

    pub fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    fn request_url(&self, url: &str) -> Url {
        let mut request_url = self.endpoint.clone();
        request_url.query_pairs_mut().append_pair("q", url);
        request_url
    }
}

#[async_trait]
impl MetadataSource for MetadataFetcher {
    async fn fetch_metadata(&self, url: &str) -> Result<MetadataFields, PreviewError> {
        let request_url = self.request_url(url);
        debug!(url = %url, "Requesting metadata");

        let response = self.client.get(request_url).send().await.map_err(|e| {
            error!(error = %e, url = %url, "Failed to reach metadata service");
            PreviewError::NetworkError(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PreviewError::HttpError(status.as_u16()));
        }

        let envelope: MetadataEnvelope = response.json().await.map_err(|e| {
            if e.is_decode() {
                PreviewError::ParseError(e.to_string())
            } else {
                PreviewError::NetworkError(e.to_string())
            }
        })?;

        debug!(url = %url, "Metadata received");
        Ok(envelope.data)
    }
}

/// Creates a fetcher against a custom service deployment.
///
/// # Examples
/// ```ignore
/// let fetcher = MetadataFetcher::new();
///
/// // Using a custom configuration
/// let custom_fetcher = MetadataFetcher::new_with_config(FetcherConfig {
///     endpoint: "https://metadata.example.com/extract".to_string(),
///     user_agent: "my-custom-agent/1.0".to_string(),
///     timeout: Duration::from_secs(20),
///     headers: Some(my_custom_headers),
///     redirect_policy: Some(my_redirect_policy),
/// });
/// ```
pub struct FetcherConfig {
    pub endpoint: String,
    pub user_agent: String,
    pub timeout: Duration,
    pub headers: Option<HeaderMap>,
    pub redirect_policy: Option<reqwest::redirect::Policy>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            endpoint: METADATA_ENDPOINT.to_string(),
            user_agent: "link-preview-card/0.2.0".to_string(),
            timeout: Duration::from_secs(10),
            headers: None,
            redirect_policy: None,
        }
    }
}
