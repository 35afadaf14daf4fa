use reqwest::{Client, StatusCode};
use crate::errors::{TokenCounterError, TokenCounterResult};
use crate::structs::ai::api_error::ApiErrorResponse;
use crate::structs::ai::token_count_request::TokenCountRequest;
use crate::structs::ai::token_count_response::TokenCountResponse;
use crate::structs::config::client_config::ClientConfig;

pub struct AnthropicClient {
    api_key: String,
    config: ClientConfig,
    client: Client,
}

impl AnthropicClient {
    pub fn new(api_key: String, config: ClientConfig) -> TokenCounterResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                TokenCounterError::transport_error(e, "creating HTTP client", config.timeout)
            })?;

        Ok(Self {
            api_key,
            config,
            client,
        })
    }

    /// Sends one count request and returns `input_tokens`.
    pub async fn count_tokens(&self, request: &TokenCountRequest) -> TokenCounterResult<u64> {
        log::debug!("📦 Request model: {}", request.model);

        let response = self
            .client
            .post(&self.config.endpoint)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", &self.config.api_version)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                TokenCounterError::transport_error(e, "sending request", self.config.timeout)
            })?;

        let status = response.status();
        // Reading the whole body releases the connection on every path below.
        let body = response
            .text()
            .await
            .map_err(|e| {
                TokenCounterError::transport_error(e, "reading response", self.config.timeout)
            })?;

        log::debug!("📨 Response status: {}", status);

        if status != StatusCode::OK {
            return Err(Self::api_error(status, &body));
        }

        Self::parse_count(&body)
    }

    /// Non-success bodies are decoded leniently; anything unexpected falls back to
    /// the status line.
    fn api_error(status: StatusCode, body: &str) -> TokenCounterError {
        match ApiErrorResponse::message_from_body(body) {
            Some(message) => TokenCounterError::Api(message),
            None => {
                log::debug!("⚠️ Undecodable error body: {}", body);
                TokenCounterError::Api(Self::status_line(status))
            }
        }
    }

    /// `"404 Not Found"`, or just the code when it has no registered reason phrase.
    fn status_line(status: StatusCode) -> String {
        match status.canonical_reason() {
            Some(reason) => format!("{} {}", status.as_str(), reason),
            None => status.as_str().to_string(),
        }
    }

    fn parse_count(body: &str) -> TokenCounterResult<u64> {
        let response: TokenCountResponse =
            serde_json::from_str(body).map_err(TokenCounterError::ResponseParse)?;
        Ok(response.input_tokens)
    }
}
