//! Provider configuration and credentials.
//!
//! API keys are sourced from the environment or injected by the caller —
//! never embedded in source. `ApiKey` redacts itself in `Debug` output so a
//! stray `{:?}` cannot leak a credential into logs.

use crate::error::SdkError;
use crate::network::{DEFAULT_AGGREGATOR_API_URL, DEFAULT_EXCHANGE_API_URL};

/// Environment variable the aggregator API key is read from by default.
pub const AGGREGATOR_API_KEY_ENV: &str = "COINDASH_AGGREGATOR_API_KEY";

// ─── ApiKey ──────────────────────────────────────────────────────────────────

/// An upstream API credential.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Read the key from an environment variable.
    pub fn from_env(var: &str) -> Result<Self, SdkError> {
        match std::env::var(var) {
            Ok(key) if !key.trim().is_empty() => Ok(Self(key)),
            _ => Err(SdkError::Config(format!(
                "environment variable {} is not set",
                var
            ))),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

// ─── Provider configs ────────────────────────────────────────────────────────

/// Configuration for the public exchange REST provider.
#[derive(Debug, Clone)]
pub struct ExchangeConfig {
    pub base_url: String,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_EXCHANGE_API_URL.to_string(),
        }
    }
}

/// Configuration for the paid aggregator provider.
#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    pub base_url: String,
    pub api_key: ApiKey,
}

impl AggregatorConfig {
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            base_url: DEFAULT_AGGREGATOR_API_URL.to_string(),
            api_key,
        }
    }

    /// Build a config with the key from [`AGGREGATOR_API_KEY_ENV`].
    pub fn from_env() -> Result<Self, SdkError> {
        Ok(Self::new(ApiKey::from_env(AGGREGATOR_API_KEY_ENV)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_debug_is_redacted() {
        let key = ApiKey::new("super-secret-key");
        assert_eq!(format!("{:?}", key), "ApiKey(***)");
        assert_eq!(key.as_str(), "super-secret-key");
    }

    #[test]
    fn missing_env_var_is_config_error() {
        let r = ApiKey::from_env("COINDASH_TEST_KEY_THAT_DOES_NOT_EXIST");
        assert!(matches!(r, Err(SdkError::Config(_))));
    }
}
