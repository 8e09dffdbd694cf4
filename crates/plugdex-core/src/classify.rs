//! Extension-point classification from a repository's root file listing.

use crate::fetcher::Fetcher;
use crate::github::{ContentEntry, RepoHost};
use crate::resolver::{RepositoryIdentity, with_redirect_retry};
use crate::{Error, Result};
use std::collections::BTreeSet;

/// Hook files the deployment tool recognizes as plugin extension points.
/// Fixed for the lifetime of the process.
pub const KNOWN_PLUGIN_TYPES: [&str; 35] = [
    "backup-check",
    "backup-export",
    "backup-import",
    "bind-external-ip",
    "check-deploy",
    "commands",
    "dependencies",
    "docker-args",
    "docker-args-build",
    "docker-args-deploy",
    "docker-args-run",
    "git-post-pull",
    "git-pre-pull",
    "install",
    "nginx-hostname",
    "nginx-pre-reload",
    "post-build",
    "post-build-buildstep",
    "post-build-dockerfile",
    "post-delete",
    "post-deploy",
    "post-domains-update",
    "post-release",
    "post-release-buildstep",
    "post-release-dockerfile",
    "pre-build",
    "pre-build-buildstep",
    "pre-build-dockerfile",
    "pre-delete",
    "pre-deploy",
    "pre-release",
    "pre-release-buildstep",
    "pre-release-dockerfile",
    "receive-app",
    "update",
];

/// Whether `name` is a recognized extension-point file name.
#[must_use]
pub fn is_known_type(name: &str) -> bool {
    KNOWN_PLUGIN_TYPES.contains(&name)
}

/// Determines which extension points a repository provides as top-level
/// files. Directories and other non-file entries never count, even when
/// their names match an extension point.
///
/// # Errors
///
/// Returns [`Error::ClassificationFailed`] when the root listing stays
/// unattainable after the redirect-retry. The caller skips the candidate
/// and continues the run.
pub async fn classify_repository<H: RepoHost + Sync>(
    host: &H,
    fetcher: &Fetcher,
    identity: &RepositoryIdentity,
) -> Result<BTreeSet<String>> {
    let listing = with_redirect_retry(
        fetcher,
        &identity.owner,
        &identity.name,
        &identity.canonical_url,
        |owner, name| async move { host.root_listing(&owner, &name).await },
    )
    .await?
    .ok_or_else(|| Error::ClassificationFailed {
        url: identity.canonical_url.clone(),
        reason: "root listing not found".to_string(),
    })?;

    Ok(listing
        .value
        .into_iter()
        .filter(ContentEntry::is_file)
        .filter(|entry| is_known_type(&entry.path))
        .map(|entry| entry.path)
        .collect())
}
