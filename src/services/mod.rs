pub mod anthropic_client;
pub mod input_collector;
pub mod result_reporter;
