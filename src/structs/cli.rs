use std::path::PathBuf;
use clap::Parser;

#[derive(Parser, Debug)]
#[clap(name = "token-counter", version)]
#[clap(about = "Count tokens of piped text and/or files with the Anthropic API", long_about = None)]
pub struct Cli {
    /// Files to count, concatenated in the order given
    pub files: Vec<PathBuf>,

    /// Model to use for token counting
    #[clap(short, long)]
    pub model: Option<String>,

    /// Show detailed output
    #[clap(short, long)]
    pub verbose: bool,
}
