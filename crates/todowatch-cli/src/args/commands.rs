use crate::types::{FilterArg, OutputFormat};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Live TUI: poll the endpoint and render the list as it changes
    Watch,

    /// Fetch once and print the list
    List {
        /// Client-side view filter
        #[arg(long, value_enum, default_value_t = FilterArg::All)]
        filter: FilterArg,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,
    },

    /// List registered endpoint adapters
    Providers,
}
