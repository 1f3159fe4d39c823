use std::time::Duration;

use linkup_domain::constants::DEFAULT_USER_AGENT;
use linkup_domain::{GeocoderConfig, LinkupError};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response, StatusCode};
use tracing::debug;

use crate::errors::InfraError;

/// Outbound HTTP client that retries transient failures.
///
/// Connection errors, timeouts, `429` and `5xx` responses are retried with
/// exponential backoff until `max_attempts` is reached. The last response is
/// returned as-is so callers can inspect non-success statuses.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    max_attempts: usize,
    base_backoff: Duration,
}

impl HttpClient {
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Client tuned for the geocoding provider described by `config`.
    ///
    /// The per-request timeout equals the overall geocoder budget; the
    /// resolver enforces the budget across retries separately.
    pub fn for_geocoder(config: &GeocoderConfig) -> Result<Self, LinkupError> {
        Self::builder()
            .timeout(Duration::from_millis(config.timeout_ms.max(1)))
            .max_attempts(config.max_attempts)
            .user_agent(config.user_agent.clone())
            .build()
    }

    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the request builder with retry semantics.
    ///
    /// # Errors
    /// `LinkupError::Network` once retries are exhausted on transport failures,
    /// `LinkupError::Internal` when the request body cannot be replayed.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, LinkupError> {
        let attempts = self.max_attempts.max(1);

        for attempt in 1..=attempts {
            let request = builder
                .try_clone()
                .ok_or_else(|| {
                    LinkupError::Internal("request body cannot be replayed for retries".into())
                })?
                .build()
                .map_err(|err| LinkupError::from(InfraError::from(err)))?;

            let method = request.method().clone();
            let url = request.url().clone();
            let last_attempt = attempt == attempts;
            debug!(attempt, %method, %url, "sending HTTP request");

            match self.client.execute(request).await {
                Ok(response) => {
                    let status = response.status();
                    debug!(attempt, %method, %url, %status, "received HTTP response");

                    if is_transient_status(status) && !last_attempt {
                        self.sleep_before_retry(attempt).await;
                        continue;
                    }
                    return Ok(response);
                }
                Err(err) => {
                    debug!(attempt, %method, %url, error = %err, "HTTP request failed");

                    if is_transient_error(&err) && !last_attempt {
                        self.sleep_before_retry(attempt).await;
                        continue;
                    }
                    return Err(InfraError::from(err).into());
                }
            }
        }

        Err(LinkupError::Internal("http client exhausted retries without a response".into()))
    }

    fn backoff_delay(&self, attempt: usize) -> Duration {
        let shift = attempt.saturating_sub(1).min(8) as u32;
        self.base_backoff.saturating_mul(1u32 << shift)
    }

    async fn sleep_before_retry(&self, attempt: usize) {
        let delay = self.backoff_delay(attempt);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    max_attempts: usize,
    base_backoff: Duration,
    user_agent: String,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            max_attempts: 2,
            base_backoff: Duration::from_millis(150),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Total number of attempts (initial try + retries).
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    pub fn base_backoff(mut self, backoff: Duration) -> Self {
        self.base_backoff = backoff;
        self
    }

    /// Public geocoders reject anonymous clients, so a user agent is always sent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        let agent = agent.into();
        if !agent.trim().is_empty() {
            self.user_agent = agent;
        }
        self
    }

    pub fn build(self) -> Result<HttpClient, LinkupError> {
        let client = ReqwestClient::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .no_proxy()
            .build()
            .map_err(|err| LinkupError::from(InfraError::from(err)))?;

        Ok(HttpClient {
            client,
            max_attempts: self.max_attempts.max(1),
            base_backoff: self.base_backoff,
        })
    }
}

fn is_transient_status(status: StatusCode) -> bool {
    status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
}

fn is_transient_error(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect() || err.is_request()
}
