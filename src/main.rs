use std::process::ExitCode;
use clap::Parser;
use crate::config::constants::DEFAULT_LOG_FILTER;
use crate::structs::cli::Cli;
use crate::workers::command_runner::CommandRunner;

mod config;
mod errors;
mod services;
mod structs;
mod workers;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let env = env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER);
    env_logger::Builder::from_env(env).init();

    let cli = Cli::parse();
    match CommandRunner::new().run_command(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
