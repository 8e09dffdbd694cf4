//! Find-types command implementation.

use anyhow::Result;
use plugdex_core::is_known_type;
use tracing::warn;

use super::run_discovery;
use crate::output::{OutputFormat, render_table};

/// Execute the find-types command.
pub async fn find_types(types: &[String], format: OutputFormat) -> Result<()> {
    for wanted in types {
        if !is_known_type(wanted) {
            warn!(requested = %wanted, "not a recognized extension point");
        }
    }

    let (registry, _report) = run_discovery().await?;
    let plugins = registry.find_by_types(types);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&plugins)?);
        }
        OutputFormat::Text => {
            if plugins.is_empty() {
                println!("No plugins provide {}.", types.join(" or "));
                return Ok(());
            }
            let rows: Vec<Vec<String>> = plugins
                .iter()
                .map(|plugin| {
                    vec![
                        plugin.name.clone(),
                        plugin.authors.join(", "),
                        plugin.url.clone(),
                        plugin
                            .types
                            .iter()
                            .cloned()
                            .collect::<Vec<_>>()
                            .join(" "),
                    ]
                })
                .collect();
            render_table(&["name", "authors", "url", "types"], &rows);
        }
    }

    Ok(())
}
