use crate::commands::build_client;
use crate::presentation::renderers::console;
use crate::types::OutputFormat;
use anyhow::Result;
use is_terminal::IsTerminal;
use todowatch_runtime::Config;
use todowatch_types::{Filter, project};

pub fn handle(config: &Config, filter: Filter, format: OutputFormat) -> Result<()> {
    let client = build_client(config)?;
    let items = client.fetch()?;
    let visible = project(&items, filter);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&visible)?);
        }
        OutputFormat::Plain => {
            let enable_color = std::io::stdout().is_terminal();
            console::render_todo_list(&visible, items.len(), filter, enable_color);
        }
    }

    Ok(())
}
