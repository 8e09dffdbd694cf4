//! List command implementation.

use anyhow::Result;
use plugdex_core::Plugin;

use super::run_discovery;
use crate::output::{OutputFormat, render_table};

/// Execute the list command.
pub async fn list(full: bool, format: OutputFormat) -> Result<()> {
    let (registry, _report) = run_discovery().await?;
    let plugins = registry.list_all();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(plugins)?);
        }
        OutputFormat::Text => {
            if plugins.is_empty() {
                println!("No plugins discovered.");
                return Ok(());
            }
            print_text_format(plugins, full);
        }
    }

    Ok(())
}

fn print_text_format(plugins: &[Plugin], full: bool) {
    let mut headers = vec!["name", "authors", "url", "types"];
    if full {
        headers.insert(2, "owner url");
    }

    let rows: Vec<Vec<String>> = plugins
        .iter()
        .map(|plugin| {
            let mut row = vec![
                plugin.name.clone(),
                plugin.authors.join(", "),
                plugin.url.clone(),
                plugin
                    .types
                    .iter()
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(" "),
            ];
            if full {
                row.insert(2, plugin.owner_url.clone());
            }
            row
        })
        .collect();

    render_table(&headers, &rows);
}
