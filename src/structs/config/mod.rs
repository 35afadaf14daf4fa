pub mod client_config;
pub mod config;
pub mod run_settings;
