use serde::Deserialize;

#[derive(Deserialize, Debug, PartialEq, Eq)]
pub struct TokenCountResponse {
    pub input_tokens: u64,
}
