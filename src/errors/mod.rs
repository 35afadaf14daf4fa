use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenCounterError {
    // Configuration errors
    #[error("Missing Anthropic API key. Set {var} environment variable.")]
    MissingApiKey { var: &'static str },
    #[error("Configuration file error at '{}': {reason}", .path.display())]
    ConfigFile { path: PathBuf, reason: String },

    // Input errors
    #[error("error reading file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error reading piped input: {0}")]
    StdinRead(#[source] io::Error),
    #[error("No input provided. Pipe text via stdin and/or provide file paths")]
    EmptyInput,

    // Network/API errors
    #[error("{context}: {source}")]
    Transport {
        context: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("API error: {0}")]
    Api(String),
    #[error("error parsing response: {0}")]
    ResponseParse(#[source] serde_json::Error),

    // Output errors
    #[error("error writing output: {0}")]
    Output(#[source] io::Error),
}

impl TokenCounterError {
    pub fn config_file_error(path: &Path, reason: impl ToString) -> Self {
        Self::ConfigFile {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub fn file_error(path: &Path, source: io::Error) -> Self {
        Self::FileRead {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Wraps a reqwest failure, labelling it as a timeout when the client deadline fired.
    pub fn transport_error(source: reqwest::Error, operation: &str, timeout: Duration) -> Self {
        let context = if source.is_timeout() {
            format!("{} timed out after {}s", operation, timeout.as_secs_f64())
        } else {
            format!("error {}", operation)
        };
        Self::Transport { context, source }
    }

    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Transport { source, .. } => source.is_timeout(),
            _ => false,
        }
    }
}

/// Result type alias for token-counter operations
pub type TokenCounterResult<T> = Result<T, TokenCounterError>;
