//! Responsible-author resolution for a confirmed repository.

use crate::github::{OrgMember, OwnerType, RepoHost, RepositoryMetadata};
use crate::resolver::RepositoryIdentity;
use crate::{Error, Result};
use std::collections::HashSet;
use tracing::debug;

/// Produces the ordered, deduplicated author handles for a repository.
///
/// User-owned repositories are attributed to the owner login.
/// Organization-owned repositories are attributed to the organization's
/// listed members (individual accounts only; nested organizations and
/// bots are dropped), in the order the platform returns them. When the
/// member list is empty or hidden, the author of the default branch's
/// head commit stands in as the sole author.
///
/// # Errors
///
/// Returns [`Error::AuthorResolutionExhausted`] when both the member list
/// and the head-commit fallback come up empty. The caller skips the
/// candidate and continues the run.
pub async fn resolve_authors<H: RepoHost + Sync>(
    host: &H,
    metadata: &RepositoryMetadata,
    identity: &RepositoryIdentity,
) -> Result<Vec<String>> {
    if metadata.owner_type == OwnerType::User {
        return Ok(vec![metadata.owner_login.clone()]);
    }

    let members = host.org_members(&metadata.owner_login).await?;
    let mut seen = HashSet::new();
    let authors: Vec<String> = members
        .into_iter()
        .filter(OrgMember::is_user)
        .map(|member| format!("@{}", member.login))
        .filter(|handle| seen.insert(handle.clone()))
        .collect();

    if !authors.is_empty() {
        return Ok(authors);
    }

    debug!(
        org = %metadata.owner_login,
        "member list empty, falling back to head commit author"
    );
    let fallback = host
        .branch_head_author(&identity.owner, &identity.name, &metadata.default_branch)
        .await?;
    match fallback {
        Some(login) => Ok(vec![login]),
        None => Err(Error::AuthorResolutionExhausted {
            repo: format!("{}/{}", identity.owner, identity.name),
        }),
    }
}
