use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "confdiff",
    about = "Structural diff for configuration documents (YAML, JSON, TOML)",
    version,
)]
pub struct Cli {
    /// The current document
    pub current: PathBuf,

    /// The past document to compare against
    pub past: PathBuf,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
