use std::time::Duration;
use crate::config::constants::{
    timeout_duration, ANTHROPIC_API_VERSION, ANTHROPIC_COUNT_TOKENS_URL, DEFAULT_TIMEOUT_SECS,
};

/// Transport settings handed to `AnthropicClient`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub api_version: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: ANTHROPIC_COUNT_TOKENS_URL.to_string(),
            api_version: ANTHROPIC_API_VERSION.to_string(),
            timeout: timeout_duration(DEFAULT_TIMEOUT_SECS),
        }
    }
}
