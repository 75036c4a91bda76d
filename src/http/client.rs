//! Low-level HTTP client — `ApiHttp`.
//!
//! Domain sub-clients build the URL and pick a retry policy; this layer owns the
//! base URL, JSON headers, status classification and retry loop.

use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, RETRY_AFTER};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Low-level HTTP client for the Learning Finnish REST API.
#[derive(Clone)]
pub struct ApiHttp {
    base_url: String,
    client: Client,
    read_policy: RetryPolicy,
}

impl ApiHttp {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, HttpError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            read_policy: RetryPolicy::None,
        })
    }

    /// Retry policy applied to GET requests.
    pub fn with_read_policy(mut self, policy: RetryPolicy) -> Self {
        self.read_policy = policy;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join a path (with or without a leading `/`) onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    // ── Verbs ────────────────────────────────────────────────────────────

    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        self.request_with_retry(Method::GET, url, None::<&()>, self.read_policy.clone())
            .await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        self.request_with_retry(Method::POST, url, body, RetryPolicy::None)
            .await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.request_with_retry(Method::PUT, url, Some(body), RetryPolicy::None)
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        self.request_with_retry(Method::DELETE, url, None::<&()>, RetryPolicy::None)
            .await
    }

    // ── Internals ────────────────────────────────────────────────────────

    async fn request_with_retry<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let config = match retry {
            RetryPolicy::None => {
                return self.do_request(&method, url, body).await;
            }
            RetryPolicy::Idempotent => RetryConfig::idempotent(),
            RetryPolicy::Custom(c) => c,
        };

        let mut attempt = 0;
        loop {
            let e = match self.do_request::<T, B>(&method, url, body).await {
                Ok(resp) => return Ok(resp),
                Err(e) => e,
            };
            if attempt >= config.max_retries || !is_retryable(&e, &config) {
                return Err(e);
            }

            // The server's Retry-After wins over the backoff schedule.
            let delay = match &e {
                HttpError::RateLimited {
                    retry_after_ms: Some(ms),
                } => Duration::from_millis(*ms),
                _ => config.delay_for_attempt(attempt),
            };
            tracing::debug!(
                attempt = attempt + 1,
                max = config.max_retries,
                delay_ms = delay.as_millis() as u64,
                error = %e,
                "Retrying {} {}",
                method,
                url
            );
            futures_timer::Delay::new(delay).await;
            attempt += 1;
        }
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: &Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        tracing::debug!(%method, url, "request");

        let mut req = self.client.request(method.clone(), url);
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await.map_err(|e| {
            tracing::warn!(%method, url, error = %e, "transport failure");
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::Transport(e)
            }
        })?;
        let status = resp.status();
        let retry_after = retry_after_ms(resp.headers());
        let text = resp.text().await?;

        if status.is_success() {
            // DELETE and some POSTs answer with an empty body.
            let raw = if text.trim().is_empty() { "null" } else { text.as_str() };
            return serde_json::from_str::<T>(raw).map_err(|e| HttpError::ServerError {
                status: status.as_u16(),
                body: format!("invalid JSON response: {e}"),
            });
        }

        tracing::warn!(%method, url, status = status.as_u16(), "request failed");
        match HttpError::from_status(status.as_u16(), text) {
            HttpError::RateLimited { .. } => Err(HttpError::RateLimited {
                retry_after_ms: retry_after,
            }),
            other => Err(other),
        }
    }
}

fn is_retryable(e: &HttpError, config: &RetryConfig) -> bool {
    match e {
        HttpError::ServerError { status, .. } => config.retryable_statuses.contains(status),
        HttpError::RateLimited { .. } => config.retryable_statuses.contains(&429),
        HttpError::Timeout => true,
        HttpError::Transport(re) => re.is_connect() || re.is_timeout() || re.is_request(),
        _ => false,
    }
}

/// `Retry-After` in delta-seconds. HTTP-date values are ignored.
fn retry_after_ms(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(|secs| secs.saturating_mul(1000))
}

/// Append `key=value` pairs to a URL, percent-encoding values and skipping `None`s.
pub fn with_query(url: String, params: &[(&str, Option<String>)]) -> String {
    let encoded: Vec<String> = params
        .iter()
        .filter_map(|(k, v)| {
            v.as_ref()
                .map(|v| format!("{}={}", k, urlencoding::encode(v)))
        })
        .collect();
    if encoded.is_empty() {
        url
    } else {
        format!("{}?{}", url, encoded.join("&"))
    }
}

/// Percent-encode a single path segment.
pub fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
