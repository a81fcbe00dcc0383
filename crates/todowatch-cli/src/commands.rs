use super::args::{Cli, Commands};
use super::handlers;
use anyhow::Result;
use todowatch_runtime::{Config, TodoClient, config::resolve_workspace_path};

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
    let mut config = Config::load_from(&data_dir.join("config.toml"))?;

    // CLI flags override config values
    if let Some(provider) = cli.provider {
        config.provider = provider;
    }
    if let Some(base_url) = cli.base_url {
        config.base_url = Some(base_url);
    }
    if let Some(limit) = cli.limit {
        config.limit = limit;
    }
    if let Some(interval_ms) = cli.interval_ms {
        config.interval_ms = interval_ms;
    }

    match cli.command {
        Commands::Watch => handlers::watch::handle(&config),
        Commands::List { filter, format } => {
            handlers::list::handle(&config, filter.into(), format)
        }
        Commands::Providers => handlers::providers::handle(),
    }
}

/// Build a client from the effective configuration
pub(crate) fn build_client(config: &Config) -> Result<TodoClient> {
    let provider = todowatch_providers::provider_from_name(&config.provider)?;
    Ok(TodoClient::new(
        provider,
        config.base_url.clone(),
        config.limit,
        config.timeout(),
    ))
}
