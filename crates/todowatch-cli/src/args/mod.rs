mod commands;

pub use commands::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "todowatch")]
#[command(about = "Watch a remote todo endpoint live from the terminal", long_about = None)]
#[command(version)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Data directory holding config.toml
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Endpoint adapter to use (overrides config)
    #[arg(long, global = true)]
    pub provider: Option<String>,

    /// Endpoint URL override
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Page size requested from the endpoint
    #[arg(long, global = true)]
    pub limit: Option<u32>,

    /// Poll period in milliseconds
    #[arg(long, global = true)]
    pub interval_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}
