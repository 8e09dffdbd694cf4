//! # plugdex-core
//!
//! Discovery and resolution pipeline for the dokku plugin directory.
//!
//! The crate scrapes the community plugin directory page for repository
//! links, confirms each repository's identity against the GitHub API
//! (reconciling renames through the web frontend's redirects, which the
//! API does not follow), resolves the responsible authors, classifies the
//! repository's extension points from its root file listing, and collects
//! the results in an in-memory registry keyed by canonical URL.
//!
//! ## Architecture
//!
//! - [`extract`]: anchor scanning over the raw directory page HTML
//! - [`resolver`]: canonical identity resolution with redirect-retry
//! - [`authors`]: owner/member/head-commit author resolution
//! - [`classify`]: extension-point classification from root listings
//! - [`registry`]: deduplicated, query-able result collection
//! - [`pipeline`]: the sequential run tying the stages together
//!
//! Remote access goes through two seams: [`github::RepoHost`] for the
//! platform API and [`fetcher::Fetcher`] for plain page fetches, both
//! passed in as values so runs stay testable and free of hidden shared
//! state.
//!
//! ## Quick Start
//!
//! ```no_run
//! use plugdex_core::{Fetcher, GitHubClient, PluginRegistry, Settings, discover};
//!
//! # async fn example() -> plugdex_core::Result<()> {
//! let settings = Settings::from_env()?;
//! let host = GitHubClient::new(&settings.api_root, &settings.token)?;
//! let fetcher = Fetcher::new()?;
//! let mut registry = PluginRegistry::new();
//!
//! let report = discover(&settings, &host, &fetcher, &mut registry).await?;
//! println!(
//!     "{} plugins discovered, {} skipped",
//!     registry.len(),
//!     report.skipped.len()
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, Error>`]. A fault while resolving a
//! single candidate skips that candidate and the run continues; only a
//! missing credential or an unreachable directory page fails the run.

/// Responsible-author resolution for confirmed repositories
pub mod authors;
/// Extension-point classification from root file listings
pub mod classify;
/// Runtime settings resolved from defaults and the environment
pub mod config;
/// Error types and result alias
pub mod error;
/// Candidate link extraction from the directory page
pub mod extract;
/// Plain HTTP fetching and redirect observation
pub mod fetcher;
/// Platform API client and the `RepoHost` seam
pub mod github;
/// The sequential discovery run
pub mod pipeline;
/// Deduplicated plugin collection with lookup queries
pub mod registry;
/// Canonical identity resolution with redirect reconciliation
pub mod resolver;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use authors::resolve_authors;
pub use classify::{KNOWN_PLUGIN_TYPES, classify_repository, is_known_type};
pub use config::Settings;
pub use error::{Error, Result};
pub use extract::{CandidateReference, extract_candidates};
pub use fetcher::Fetcher;
pub use github::{
    ContentEntry, GitHubClient, Lookup, OrgMember, OwnerType, RepoHost, RepositoryMetadata,
};
pub use pipeline::{DiscoveryReport, SkippedCandidate, discover};
pub use registry::{Plugin, PluginRegistry};
pub use resolver::{RepositoryIdentity, owner_name_from_url, resolve_repository};
