use std::io::{self, IsTerminal};
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::errors::TokenCounterResult;
use crate::services::anthropic_client::AnthropicClient;
use crate::services::input_collector::InputCollector;
use crate::services::result_reporter::ResultReporter;
use crate::structs::ai::token_count_request::TokenCountRequest;
use crate::structs::cli::Cli;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub const fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, cli: Cli) -> TokenCounterResult<()> {
        self.start_time = Some(Instant::now());

        let result = self.count_command(cli).await;

        if let Err(e) = &result {
            if e.is_timeout() {
                log::info!("💡 No answer within the client timeout; check your network");
            }
            log::debug!("❌ {:?}", e);
        }

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    async fn count_command(&self, cli: Cli) -> TokenCounterResult<()> {
        let api_key = ConfigManager::api_key()?;
        let config = ConfigManager::load()?;
        let settings = ConfigManager::resolve(&cli, &config);

        let stdin = io::stdin();
        let piped = if stdin.is_terminal() {
            log::debug!("⌨️  stdin is a terminal, not reading it");
            None
        } else {
            Some(stdin.lock())
        };
        let text = InputCollector::collect(&cli.files, piped)?;

        let request = TokenCountRequest::new(&text, &settings.model)?;
        let client = AnthropicClient::new(api_key, settings.client)?;
        log::info!("🔢 Counting {} characters with {}", text.char_len(), settings.model);
        let count = client.count_tokens(&request).await?;

        let mut out = io::stdout().lock();
        ResultReporter::new(settings.verbose).report(&mut out, &settings.model, &text, count)
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}
