//! Low-level HTTP client — `MarketHttp`.
//!
//! One method per upstream endpoint. Returns raw `serde_json::Value`
//! payloads — normalization into canonical entities happens in the
//! [`pipeline`](crate::pipeline), keeping this layer a pure fetch
//! collaborator with a bounded wait.

use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Request timeout — the bounded wait the fetch layer enforces so a slow
/// upstream surfaces as a recoverable error instead of hanging the caller.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Low-level HTTP client for upstream market-data REST APIs.
#[derive(Clone)]
pub struct MarketHttp {
    base_url: String,
    client: Client,
}

impl MarketHttp {
    pub fn new(base_url: &str) -> Self {
        let builder = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .pool_max_idle_per_host(10);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Exchange endpoints ───────────────────────────────────────────────

    /// 24h rolling ticker for one symbol.
    pub async fn get_ticker_24h(&self, symbol: &str) -> Result<serde_json::Value, HttpError> {
        let url = format!(
            "{}/api/v3/ticker/24hr?symbol={}",
            self.base_url,
            urlencoding::encode(symbol)
        );
        self.get(&url, &[], RetryPolicy::Idempotent).await
    }

    /// Kline window for one symbol and interval code.
    pub async fn get_klines(
        &self,
        symbol: &str,
        interval: &str,
        limit: u32,
    ) -> Result<serde_json::Value, HttpError> {
        let url = format!(
            "{}/api/v3/klines?symbol={}&interval={}&limit={}",
            self.base_url,
            urlencoding::encode(symbol),
            urlencoding::encode(interval),
            limit
        );
        self.get(&url, &[], RetryPolicy::Idempotent).await
    }

    // ── Aggregator endpoints ─────────────────────────────────────────────

    /// Latest quotes (price, market cap, supply) for one base asset.
    pub async fn get_quotes_latest(
        &self,
        base_asset: &str,
        key_header: (&str, &str),
    ) -> Result<serde_json::Value, HttpError> {
        let url = format!(
            "{}/v1/cryptocurrency/quotes/latest?symbol={}",
            self.base_url,
            urlencoding::encode(base_asset)
        );
        self.get(&url, &[key_header], RetryPolicy::Idempotent).await
    }

    /// Historical OHLCV window for one base asset and interval code.
    pub async fn get_ohlcv_historical(
        &self,
        base_asset: &str,
        interval: &str,
        count: u32,
        key_header: (&str, &str),
    ) -> Result<serde_json::Value, HttpError> {
        let url = format!(
            "{}/v2/cryptocurrency/ohlcv/historical?symbol={}&interval={}&count={}",
            self.base_url,
            urlencoding::encode(base_asset),
            urlencoding::encode(interval),
            count
        );
        self.get(&url, &[key_header], RetryPolicy::Idempotent).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let config = match &retry {
            RetryPolicy::None => {
                return self.do_request(url, headers).await;
            }
            RetryPolicy::Idempotent => RetryConfig::idempotent(),
            RetryPolicy::Custom(c) => c.clone(),
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_request::<T>(url, headers).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let should_retry = match &e {
                        HttpError::ServerError { status, .. } => {
                            config.retryable_statuses.contains(status)
                        }
                        HttpError::RateLimited { retry_after_ms } => {
                            if let Some(ms) = retry_after_ms {
                                futures_timer::Delay::new(Duration::from_millis(*ms)).await;
                            }
                            config.retryable_statuses.contains(&429)
                        }
                        HttpError::Timeout => true,
                        HttpError::Reqwest(re) => {
                            re.is_connect() || re.is_timeout() || re.is_request()
                        }
                        _ => false,
                    };

                    if should_retry && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "Retrying request to {}",
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_request<T: DeserializeOwned>(
        &self,
        url: &str,
        headers: &[(&str, &str)],
    ) -> Result<T, HttpError> {
        let mut req = self.client.get(url);
        for (name, value) in headers {
            req = req.header(*name, *value);
        }

        let resp = req.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::Reqwest(e)
            }
        })?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let retry_after_ms = resp
            .headers()
            .get("Retry-After")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<u64>().ok())
            .map(|secs| secs * 1_000);
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            401 | 403 => Err(HttpError::Unauthorized),
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited { retry_after_ms }),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}
