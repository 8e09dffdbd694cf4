//! Find-authors command implementation.

use anyhow::{Result, bail};

use super::run_discovery;
use crate::output::{OutputFormat, render_table};

/// Execute the find-authors command.
pub async fn find_authors(name: &str, format: OutputFormat) -> Result<()> {
    let (registry, _report) = run_discovery().await?;
    let plugins = registry.find_by_name(name);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&plugins)?);
        }
        OutputFormat::Text => {
            if plugins.is_empty() {
                bail!("{name} plugin not found");
            }
            let rows: Vec<Vec<String>> = plugins
                .iter()
                .map(|plugin| vec![plugin.url.clone(), plugin.authors.join(", ")])
                .collect();
            render_table(&["url", "authors"], &rows);
        }
    }

    Ok(())
}
