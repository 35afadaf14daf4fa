use serde::Deserialize;

/// Error envelope of a non-success response: `{"error": {"message": "..."}}`.
#[derive(Deserialize, Debug, Clone)]
pub struct ApiErrorResponse {
    pub error: ApiError,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApiError {
    #[serde(default)]
    pub message: String,
}

impl ApiErrorResponse {
    /// Best-effort extraction of the service message; `None` when the body is
    /// not the expected envelope or the message is empty.
    pub fn message_from_body(body: &str) -> Option<String> {
        serde_json::from_str::<Self>(body)
            .ok()
            .map(|response| response.error.message)
            .filter(|message| !message.is_empty())
    }
}
