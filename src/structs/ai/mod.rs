pub mod anthropic_message;
pub mod api_error;
pub mod token_count_request;
pub mod token_count_response;
