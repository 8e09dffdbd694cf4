//! Canonical repository identity resolution with redirect reconciliation.
//!
//! The directory page often references a repository by a pre-rename owner
//! or name. The platform's web frontend redirects such URLs to the
//! repository's current location, but the API reports the stale identity
//! as not found. A failed API lookup is therefore retried exactly once
//! against the owner/name re-derived from the resolved web URL. The retry
//! protocol lives in [`with_redirect_retry`] and is shared with root
//! listing classification.

use crate::fetcher::Fetcher;
use crate::github::{Lookup, RepoHost, RepositoryMetadata};
use crate::{Error, Result};
use std::future::Future;
use tracing::{debug, info};
use url::Url;

/// Confirmed owner/name pair plus the canonical web URL used as the
/// registry's deduplication key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryIdentity {
    /// Owner login confirmed by the platform.
    pub owner: String,
    /// Repository name confirmed by the platform.
    pub name: String,
    /// Web URL rebuilt from the confirmed pair.
    pub canonical_url: String,
}

impl RepositoryIdentity {
    /// Web URL of the owning account.
    #[must_use]
    pub fn owner_url(&self) -> String {
        match self.canonical_url.rsplit_once('/') {
            Some((base, _)) => base.to_string(),
            None => self.canonical_url.clone(),
        }
    }
}

/// Extracts the `(owner, name)` guess from the first two path segments of
/// a repository web URL.
#[must_use]
pub fn owner_name_from_url(url: &str) -> Option<(String, String)> {
    let parsed = Url::parse(url).ok()?;
    let mut segments = parsed.path_segments()?.filter(|segment| !segment.is_empty());
    let owner = segments.next()?.to_string();
    let name = segments.next()?.to_string();
    Some((owner, name))
}

fn canonical_web_url(original: &str, owner: &str, name: &str) -> String {
    match Url::parse(original) {
        Ok(mut parsed) => {
            parsed.set_path(&format!("/{owner}/{name}"));
            parsed.set_query(None);
            parsed.set_fragment(None);
            parsed.to_string()
        }
        Err(_) => format!("https://github.com/{owner}/{name}"),
    }
}

/// A lookup result that survived the retry protocol, carrying the
/// owner/name pair that finally satisfied the platform.
#[derive(Debug)]
pub(crate) struct Reconciled<T> {
    pub owner: String,
    pub name: String,
    pub value: T,
}

/// Runs `lookup` for `(owner, name)`; on not-found, re-derives the pair
/// from the resolved location of `original_url` and retries exactly once.
///
/// `Ok(None)` means the retried lookup was also a miss, or the resolved
/// location gave nothing new to retry with.
pub(crate) async fn with_redirect_retry<T, F, Fut>(
    fetcher: &Fetcher,
    owner: &str,
    name: &str,
    original_url: &str,
    mut lookup: F,
) -> Result<Option<Reconciled<T>>>
where
    F: FnMut(String, String) -> Fut,
    Fut: Future<Output = Result<Lookup<T>>>,
{
    if let Lookup::Found(value) = lookup(owner.to_string(), name.to_string()).await? {
        return Ok(Some(Reconciled {
            owner: owner.to_string(),
            name: name.to_string(),
            value,
        }));
    }

    let location = fetcher.resolved_location(original_url).await?;
    let Some((corrected_owner, corrected_name)) = owner_name_from_url(&location) else {
        debug!(%location, "resolved location has no owner/name path");
        return Ok(None);
    };
    if corrected_owner == owner && corrected_name == name {
        debug!(%location, "redirect did not change the identity");
        return Ok(None);
    }

    info!(
        stale = %format!("{owner}/{name}"),
        corrected = %format!("{corrected_owner}/{corrected_name}"),
        "retrying lookup with redirected identity"
    );
    match lookup(corrected_owner.clone(), corrected_name.clone()).await? {
        Lookup::Found(value) => Ok(Some(Reconciled {
            owner: corrected_owner,
            name: corrected_name,
            value,
        })),
        Lookup::NotFound => Ok(None),
    }
}

/// Resolves a scraped `(owner, name, url)` guess to a confirmed identity
/// and its metadata.
///
/// # Errors
///
/// Returns [`Error::ResolutionFailed`] when the platform still reports the
/// repository missing after the redirect-retry. The caller skips the
/// candidate and continues the run.
pub async fn resolve_repository<H: RepoHost + Sync>(
    host: &H,
    fetcher: &Fetcher,
    owner_guess: &str,
    name_guess: &str,
    url: &str,
) -> Result<(RepositoryIdentity, RepositoryMetadata)> {
    let reconciled = with_redirect_retry(fetcher, owner_guess, name_guess, url, |owner, name| {
        async move { host.repository(&owner, &name).await }
    })
    .await?
    .ok_or_else(|| Error::ResolutionFailed {
        url: url.to_string(),
        name: name_guess.to_string(),
    })?;

    let identity = RepositoryIdentity {
        canonical_url: canonical_web_url(url, &reconciled.owner, &reconciled.name),
        owner: reconciled.owner,
        name: reconciled.name,
    };
    Ok((identity, reconciled.value))
}
