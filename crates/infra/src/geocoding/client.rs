//! Nominatim-compatible geocoding client

use std::time::Duration;

use async_trait::async_trait;
use linkup_core::Geocoder;
use linkup_domain::{GeocodeResult, GeocoderConfig, LinkupError, Result};
use reqwest::Method;
use tracing::{debug, info, warn};
use url::Url;

use super::types::{GeocodingError, SearchPlace};
use crate::http::HttpClient;

type SearchResult = std::result::Result<Vec<GeocodeResult>, GeocodingError>;

/// Geocoder backed by `GET {base}/search?format=jsonv2`.
pub struct HttpGeocoder {
    http_client: HttpClient,
    search_url: Url,
    timeout: Duration,
    limit: u8,
}

impl HttpGeocoder {
    /// Create a geocoder rooted at `base_url`.
    ///
    /// # Errors
    /// Returns `LinkupError::Config` when `base_url` is not an absolute URL.
    pub fn new(base_url: &str, http_client: HttpClient) -> Result<Self> {
        let search_url = Url::parse(&format!("{}/search", base_url.trim_end_matches('/')))
            .map_err(|e| LinkupError::Config(format!("Invalid geocoder URL {base_url:?}: {e}")))?;

        Ok(Self { http_client, search_url, timeout: Duration::from_secs(10), limit: 1 })
    }

    /// Build the geocoder and its HTTP client from configuration.
    pub fn from_config(config: &GeocoderConfig) -> Result<Self> {
        let http_client = HttpClient::for_geocoder(config)?;
        Ok(Self::new(&config.base_url, http_client)?
            .with_timeout(Duration::from_millis(config.timeout_ms.max(1))))
    }

    /// Overall budget for one search, retries included.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Number of candidates requested from the provider.
    pub fn with_limit(mut self, limit: u8) -> Self {
        self.limit = limit.max(1);
        self
    }

    pub fn search_url(&self) -> &Url {
        &self.search_url
    }

    /// Run a free-text search, best candidates first.
    ///
    /// # Errors
    /// Returns `GeocodingError` for transport failures, non-success statuses,
    /// malformed bodies, or when the overall timeout elapses.
    pub async fn search(&self, query: &str) -> SearchResult {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        tokio::time::timeout(self.timeout, self.search_once(query))
            .await
            .map_err(|_| GeocodingError::Timeout(self.timeout))?
    }

    async fn search_once(&self, query: &str) -> SearchResult {
        let limit = self.limit.to_string();
        let request = self.http_client.request(Method::GET, self.search_url.clone()).query(&[
            ("q", query),
            ("format", "jsonv2"),
            ("addressdetails", "1"),
            ("limit", limit.as_str()),
        ]);

        let response = self.http_client.send(request).await.map_err(|err| match err {
            LinkupError::Network(msg) | LinkupError::Internal(msg) => GeocodingError::Network(msg),
            other => GeocodingError::Network(other.to_string()),
        })?;

        let status = response.status();
        debug!(status = status.as_u16(), query, "geocoder responded");

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GeocodingError::Api { status: status.as_u16(), message });
        }

        let places: Vec<SearchPlace> = response
            .json()
            .await
            .map_err(|e| GeocodingError::InvalidPayload(format!("Failed to parse response: {e}")))?;

        let mut first_error = None;
        let results: Vec<GeocodeResult> = places
            .into_iter()
            .filter_map(|place| match place.into_result() {
                Ok(result) => Some(result),
                Err(err) => {
                    warn!(query, error = %err, "skipping unusable geocoder candidate");
                    first_error.get_or_insert(err);
                    None
                }
            })
            .collect();

        // only a response with nothing usable in it is a payload error
        if let (true, Some(err)) = (results.is_empty(), first_error) {
            return Err(err);
        }

        info!(query, candidates = results.len(), "geocoded free-text location");
        Ok(results)
    }
}

#[async_trait]
impl Geocoder for HttpGeocoder {
    async fn geocode(&self, query: &str) -> Result<Vec<GeocodeResult>> {
        self.search(query).await.map_err(LinkupError::from)
    }
}
