use crate::structs::config::client_config::ClientConfig;

/// Effective settings after merging CLI flags, the config file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub model: String,
    pub verbose: bool,
    pub client: ClientConfig,
}
