//! CLI structure and argument parsing for `plugdex`.
//!
//! Every command runs a full discovery pass against the plugin directory
//! and the platform API before answering, so each invocation reflects the
//! directory as it is right now. The API credential comes from the
//! `GH_TOKEN` environment variable; without it the CLI refuses to start.

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// Main CLI structure for the `plugdex` command.
#[derive(Parser, Debug)]
#[command(name = "plugdex")]
#[command(version)]
#[command(about = "Explore dokku plugins published on the community directory page", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

/// Available subcommands for the `plugdex` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Discover every plugin and list the registry
    List {
        /// Include the owner account URL column in text output
        #[arg(long)]
        full: bool,
        /// Output format
        #[arg(short = 'o', long, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Find plugins by exact name and show their authors
    #[command(name = "find-authors")]
    FindAuthors {
        /// Plugin name to look up
        #[arg(long)]
        name: String,
        /// Output format
        #[arg(short = 'o', long, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Find plugins providing any of the given extension points
    #[command(name = "find-types")]
    FindTypes {
        /// Extension point name(s), comma separated (e.g. "pre-build,install")
        #[arg(long = "type", value_name = "TYPE", value_delimiter = ',', required = true)]
        types: Vec<String>,
        /// Output format
        #[arg(short = 'o', long, value_enum, default_value = "text")]
        output: OutputFormat,
    },
}
