//! Sequential discovery pipeline from directory page to populated registry.
//!
//! Candidates are processed one at a time: identity resolution, author
//! resolution, then classification, each a blocking round-trip against
//! the platform. Run time therefore grows linearly with the number of
//! candidates times the remote calls per candidate. A fault anywhere in
//! one candidate's chain skips that candidate with a log line naming the
//! URL and reason; only fetching the directory page itself, or startup
//! configuration, can fail the whole run.

use crate::authors::resolve_authors;
use crate::classify::classify_repository;
use crate::config::Settings;
use crate::extract::extract_candidates;
use crate::fetcher::Fetcher;
use crate::github::RepoHost;
use crate::registry::{Plugin, PluginRegistry};
use crate::resolver::{owner_name_from_url, resolve_repository};
use crate::{Error, Result};
use tracing::{debug, info, warn};

/// Outcome summary of one discovery run.
#[derive(Debug, Default)]
pub struct DiscoveryReport {
    /// Number of plugins inserted into the registry.
    pub registered: usize,
    /// Candidates dropped from the run, with the fault that skipped them.
    pub skipped: Vec<SkippedCandidate>,
}

/// A candidate reference dropped from the run, kept for reporting.
#[derive(Debug, Clone)]
pub struct SkippedCandidate {
    /// The scraped URL that could not be resolved.
    pub url: String,
    /// Human-readable description of the fault.
    pub reason: String,
}

/// Discovers every plugin referenced by the directory page and registers
/// the fully resolved records, one candidate at a time.
pub async fn discover<H: RepoHost + Sync>(
    settings: &Settings,
    host: &H,
    fetcher: &Fetcher,
    registry: &mut PluginRegistry,
) -> Result<DiscoveryReport> {
    info!(url = %settings.directory_url, "retrieving plugin directory");
    let page = fetcher.page_text(&settings.directory_url).await?;

    let candidates: Vec<_> = extract_candidates(&page, &settings.publisher).collect();
    info!(candidates = candidates.len(), "extracted candidate references");

    let mut report = DiscoveryReport::default();
    for candidate in candidates {
        match resolve_candidate(host, fetcher, &candidate.href).await {
            Ok(plugin) => {
                if registry.register(plugin) {
                    report.registered += 1;
                } else {
                    debug!(url = %candidate.href, "duplicate canonical url, keeping first record");
                }
            }
            Err(error) => {
                warn!(
                    url = %candidate.href,
                    category = error.category(),
                    "skipping candidate: {error}"
                );
                report.skipped.push(SkippedCandidate {
                    url: candidate.href,
                    reason: error.to_string(),
                });
            }
        }
    }

    info!(
        registered = report.registered,
        skipped = report.skipped.len(),
        "discovery finished"
    );
    Ok(report)
}

async fn resolve_candidate<H: RepoHost + Sync>(
    host: &H,
    fetcher: &Fetcher,
    href: &str,
) -> Result<Plugin> {
    let (owner_guess, name_guess) = owner_name_from_url(href)
        .ok_or_else(|| Error::Parse(format!("no owner/name segments in '{href}'")))?;
    let (identity, metadata) =
        resolve_repository(host, fetcher, &owner_guess, &name_guess, href).await?;
    let authors = resolve_authors(host, &metadata, &identity).await?;
    let types = classify_repository(host, fetcher, &identity).await?;
    Ok(Plugin {
        name: identity.name.clone(),
        authors,
        owner_url: identity.owner_url(),
        url: identity.canonical_url.clone(),
        types,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::github::{OrgMember, OwnerType, RepositoryMetadata};
    use crate::test_support::FakeHost;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn metadata(owner: &str, owner_type: OwnerType) -> RepositoryMetadata {
        RepositoryMetadata {
            owner_login: owner.to_string(),
            owner_type,
            default_branch: "master".to_string(),
        }
    }

    async fn directory_server(html: &str) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/plugins"))
            .respond_with(ResponseTemplate::new(200).set_body_string(html))
            .mount(&server)
            .await;
        server
    }

    fn settings_for(server: &MockServer) -> Settings {
        let mut settings = Settings::new("test-token");
        settings.directory_url = format!("{}/plugins", server.uri());
        settings
    }

    #[tokio::test]
    async fn faulty_candidates_are_skipped_and_the_run_continues() {
        let html = r#"
            <a href="https://github.com/jezdez/dokku-postgres-plugin">PostgreSQL</a>
            <a href="https://github.com/ghost-org/dokku-gone">gone</a>
        "#;
        let server = directory_server(html).await;

        // ghost-org/dokku-gone resolves but exhausts author resolution:
        // empty member list and an unattributed head commit.
        let host = FakeHost::default()
            .repo(
                "jezdez",
                "dokku-postgres-plugin",
                metadata("jezdez", OwnerType::User),
            )
            .listing(
                "jezdez",
                "dokku-postgres-plugin",
                vec![("commands", "file"), ("install", "file")],
            )
            .repo(
                "ghost-org",
                "dokku-gone",
                metadata("ghost-org", OwnerType::Organization),
            )
            .org("ghost-org", Vec::new())
            .head_author("ghost-org", "dokku-gone", None);

        let fetcher = Fetcher::with_timeout(Duration::from_millis(500)).unwrap();
        let mut registry = PluginRegistry::new();
        let report = discover(&settings_for(&server), &host, &fetcher, &mut registry)
            .await
            .unwrap();

        assert_eq!(report.registered, 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].url, "https://github.com/ghost-org/dokku-gone");
        assert!(report.skipped[0].reason.contains("no authors"));

        let plugins = registry.list_all();
        assert_eq!(plugins.len(), 1);
        assert_eq!(plugins[0].name, "dokku-postgres-plugin");
        assert_eq!(plugins[0].authors, vec!["jezdez"]);
        assert_eq!(plugins[0].owner_url, "https://github.com/jezdez");
    }

    #[tokio::test]
    async fn duplicate_candidates_register_once() {
        let html = r#"
            <a href="https://github.com/jezdez/dokku-postgres-plugin">PostgreSQL</a>
            <a href="https://github.com/jezdez/dokku-postgres-plugin">PostgreSQL again</a>
        "#;
        let server = directory_server(html).await;
        let host = FakeHost::default()
            .repo(
                "jezdez",
                "dokku-postgres-plugin",
                metadata("jezdez", OwnerType::User),
            )
            .listing("jezdez", "dokku-postgres-plugin", vec![("install", "file")]);

        let fetcher = Fetcher::with_timeout(Duration::from_millis(500)).unwrap();
        let mut registry = PluginRegistry::new();
        let report = discover(&settings_for(&server), &host, &fetcher, &mut registry)
            .await
            .unwrap();

        assert_eq!(report.registered, 1);
        assert!(report.skipped.is_empty());
        assert_eq!(registry.len(), 1);
    }

    #[tokio::test]
    async fn organization_members_become_prefixed_authors() {
        let html = r#"<a href="https://github.com/F4-Group/dokku-apt">APT</a>"#;
        let server = directory_server(html).await;
        let host = FakeHost::default()
            .repo(
                "F4-Group",
                "dokku-apt",
                metadata("F4-Group", OwnerType::Organization),
            )
            .org(
                "F4-Group",
                vec![
                    OrgMember {
                        login: "alice".to_string(),
                        kind: "User".to_string(),
                    },
                    OrgMember {
                        login: "build-bot".to_string(),
                        kind: "Bot".to_string(),
                    },
                ],
            )
            .listing(
                "F4-Group",
                "dokku-apt",
                vec![("pre-build", "file"), ("README.md", "file"), ("install", "file")],
            );

        let fetcher = Fetcher::with_timeout(Duration::from_millis(500)).unwrap();
        let mut registry = PluginRegistry::new();
        discover(&settings_for(&server), &host, &fetcher, &mut registry)
            .await
            .unwrap();

        let plugins = registry.list_all();
        assert_eq!(plugins[0].authors, vec!["@alice"]);
        let types: Vec<_> = plugins[0].types.iter().map(String::as_str).collect();
        assert_eq!(types, vec!["install", "pre-build"]);
    }

    #[tokio::test]
    async fn missing_directory_page_fails_the_run() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/plugins"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let host = FakeHost::default();
        let fetcher = Fetcher::with_timeout(Duration::from_millis(500)).unwrap();
        let mut registry = PluginRegistry::new();
        let result = discover(&settings_for(&server), &host, &fetcher, &mut registry).await;
        assert!(matches!(result, Err(Error::NotFound(_))));
    }
}
