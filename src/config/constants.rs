use std::time::Duration;

pub const ANTHROPIC_COUNT_TOKENS_URL: &str = "https://api.anthropic.com/v1/messages/count_tokens";
pub const ANTHROPIC_API_VERSION: &str = "2023-06-01";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_MODEL: &str = "claude-3-sonnet-20240229";
pub const USER_ROLE: &str = "user";

pub const ANTHROPIC_API_KEY_ENV: &str = "ANTHROPIC_API_KEY";
pub const CONFIG_PATH_ENV: &str = "TOKEN_COUNTER_CONFIG";
pub const CONFIG_DIR_NAME: &str = "token-counter";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_LOG_FILTER: &str = "warn";

pub fn timeout_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
