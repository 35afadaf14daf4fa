use serde::Deserialize;

/// Contents of the optional `config.toml`.
#[derive(Debug, Default, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub model: Option<String>,

    #[serde(default)]
    pub verbose: bool,

    #[serde(default)]
    pub api_url: Option<String>,
}
