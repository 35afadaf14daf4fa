use serde::Serialize;
use crate::config::constants::USER_ROLE;
use crate::errors::{TokenCounterError, TokenCounterResult};
use crate::structs::ai::anthropic_message::AnthropicMessage;
use crate::structs::input_text::InputText;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenCountRequest {
    pub model: String,
    pub messages: Vec<AnthropicMessage>,
}

impl TokenCountRequest {
    /// Wraps the whole text in a single `user` message.
    pub fn new(text: &InputText, model: &str) -> TokenCounterResult<Self> {
        if text.is_empty() {
            return Err(TokenCounterError::EmptyInput);
        }

        Ok(Self {
            model: model.to_string(),
            messages: vec![AnthropicMessage {
                role: USER_ROLE.to_string(),
                content: text.as_str().to_string(),
            }],
        })
    }
}
