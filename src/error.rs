//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[cfg(feature = "http")]
    #[error("HTTP error: {0}")]
    Http(HttpError),

    /// Transport-level failure: the upstream could not be reached within the
    /// fetch layer's bounded wait. Recoverable — the caller may retry the
    /// whole interaction.
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

#[cfg(feature = "http")]
impl SdkError {
    /// Classify an HTTP-layer error at the provider boundary.
    ///
    /// Timeouts, connection failures, and retry exhaustion become
    /// `UpstreamUnavailable`; everything else stays an `Http` error.
    pub fn from_http(e: HttpError) -> Self {
        match &e {
            HttpError::Timeout => SdkError::UpstreamUnavailable("request timed out".into()),
            HttpError::MaxRetriesExceeded { .. } => SdkError::UpstreamUnavailable(e.to_string()),
            HttpError::Reqwest(re) if re.is_connect() || re.is_timeout() => {
                SdkError::UpstreamUnavailable(e.to_string())
            }
            _ => SdkError::Http(e),
        }
    }
}

/// Normalization pipeline errors.
///
/// Every pipeline operation is total: it returns a fully-populated entity or
/// one of these — never a partially populated entity. Parse failures are
/// local and never retried here; retry belongs to the fetch layer.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("malformed payload ({context}): {reason}")]
    MalformedPayload {
        context: &'static str,
        reason: String,
    },
}

impl ParseError {
    pub fn malformed(context: &'static str, reason: impl Into<String>) -> Self {
        ParseError::MalformedPayload {
            context,
            reason: reason.into(),
        }
    }
}

/// HTTP-layer errors.
#[cfg(feature = "http")]
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    /// The aggregator rejected the API key.
    #[error("unauthorized")]
    Unauthorized,

    #[error("not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("timeout")]
    Timeout,

    #[error("max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_payload_carries_context() {
        let e = ParseError::malformed("ticker", "no price field");
        assert_eq!(e.to_string(), "malformed payload (ticker): no price field");
    }

    #[cfg(feature = "http")]
    #[test]
    fn timeout_classifies_as_unavailable() {
        let e = SdkError::from_http(HttpError::Timeout);
        assert!(matches!(e, SdkError::UpstreamUnavailable(_)));
    }

    #[cfg(feature = "http")]
    #[test]
    fn server_error_stays_http() {
        let e = SdkError::from_http(HttpError::ServerError {
            status: 500,
            body: "boom".into(),
        });
        assert!(matches!(e, SdkError::Http(_)));
    }
}
