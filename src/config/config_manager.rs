use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use crate::config::constants::{
    ANTHROPIC_API_KEY_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_PATH_ENV, DEFAULT_MODEL,
};
use crate::errors::{TokenCounterError, TokenCounterResult};
use crate::structs::cli::Cli;
use crate::structs::config::client_config::ClientConfig;
use crate::structs::config::config::Config;
use crate::structs::config::run_settings::RunSettings;

pub struct ConfigManager;

impl ConfigManager {

    pub fn api_key() -> TokenCounterResult<String> {
        Self::api_key_from(env::var(ANTHROPIC_API_KEY_ENV).ok())
    }

    /// An unset or empty variable both count as missing.
    pub fn api_key_from(value: Option<String>) -> TokenCounterResult<String> {
        value
            .filter(|key| !key.is_empty())
            .ok_or(TokenCounterError::MissingApiKey { var: ANTHROPIC_API_KEY_ENV })
    }

    pub fn config_path() -> Option<PathBuf> {
        if let Some(path) = env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn load() -> TokenCounterResult<Config> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> TokenCounterResult<Config> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("📋 No config file at {}, using defaults", path.display());
                return Ok(Config::default());
            }
            Err(e) => return Err(TokenCounterError::config_file_error(path, e)),
        };

        log::info!("📋 Loading config from: {}", path.display());
        toml::from_str(&content)
            .map_err(|e| TokenCounterError::config_file_error(path, e.message()))
    }

    /// CLI flags win over the config file, which wins over built-in defaults.
    pub fn resolve(cli: &Cli, config: &Config) -> RunSettings {
        let model = cli
            .model
            .clone()
            .or_else(|| config.model.clone())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let client = match &config.api_url {
            Some(url) => ClientConfig::with_endpoint(url.clone()),
            None => ClientConfig::default(),
        };

        RunSettings {
            model,
            verbose: cli.verbose || config.verbose,
            client,
        }
    }
}
