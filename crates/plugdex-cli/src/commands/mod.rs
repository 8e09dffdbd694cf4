//! Command implementations.

mod find_authors;
mod find_types;
mod list;

pub use find_authors::find_authors;
pub use find_types::find_types;
pub use list::list;

use anyhow::{Context, Result};
use plugdex_core::{DiscoveryReport, Fetcher, GitHubClient, PluginRegistry, Settings, discover};

/// Runs a full discovery pass and returns the populated registry.
///
/// Every command starts here: the registry only lives for one invocation,
/// so each answer reflects the directory page as it is right now.
pub(crate) async fn run_discovery() -> Result<(PluginRegistry, DiscoveryReport)> {
    let settings = Settings::from_env().context("cannot start discovery")?;
    let host = GitHubClient::new(&settings.api_root, &settings.token)?;
    let fetcher = Fetcher::new()?;

    let mut registry = PluginRegistry::new();
    let report = discover(&settings, &host, &fetcher, &mut registry).await?;
    Ok((registry, report))
}
