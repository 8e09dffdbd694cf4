//! plugdex CLI - explore the dokku plugin directory.
//!
//! This is the entry point for the `plugdex` command-line interface.
//! Command implementations live in separate modules; discovery itself is
//! provided by `plugdex-core`.

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;

    match cli.command {
        Commands::List { full, output } => {
            commands::list(full, output).await?;
        }
        Commands::FindAuthors { name, output } => {
            commands::find_authors(&name, output).await?;
        }
        Commands::FindTypes { types, output } => {
            commands::find_types(&types, output).await?;
        }
    }

    Ok(())
}

fn initialize_logging(cli: &Cli) -> Result<()> {
    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    // Logs go to stderr so stdout stays clean for tables and JSON.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
