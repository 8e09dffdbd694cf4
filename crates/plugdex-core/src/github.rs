//! Platform API client used to confirm repository identity and gather
//! ownership, membership, and file-listing metadata.
//!
//! The pipeline talks to the platform through the [`RepoHost`] trait so
//! tests can substitute an in-memory host. [`GitHubClient`] is the
//! production implementation backed by the GitHub REST API.

use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Outcome of an API lookup that treats the platform's not-found response
/// as data rather than a fault, so retry handling stays an ordinary
/// conditional instead of exception-driven control flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    /// The resource exists and was decoded.
    Found(T),
    /// The platform reports no such resource for this identity.
    NotFound,
}

impl<T> Lookup<T> {
    /// Converts into an `Option`, discarding the not-found marker.
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotFound => None,
        }
    }
}

/// Kind of account that owns a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum OwnerType {
    /// An individual account.
    User,
    /// An organization account with its own member list.
    Organization,
}

/// Per-repository metadata, fetched once per candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryMetadata {
    /// Login of the owning account, as the platform spells it.
    pub owner_login: String,
    /// Whether the owner is an individual or an organization.
    pub owner_type: OwnerType,
    /// Name of the repository's default branch.
    pub default_branch: String,
}

/// A single entry from an organization's public member list.
#[derive(Debug, Clone, Deserialize)]
pub struct OrgMember {
    /// Member account login.
    pub login: String,
    /// Account kind as reported by the platform (`User`, `Organization`, `Bot`, ...).
    #[serde(rename = "type")]
    pub kind: String,
}

impl OrgMember {
    /// Whether this member is an individual account.
    #[must_use]
    pub fn is_user(&self) -> bool {
        self.kind == "User"
    }
}

/// One entry of a repository's top-level directory listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentEntry {
    /// Path of the entry relative to the repository root.
    pub path: String,
    /// Entry kind as reported by the platform (`file`, `dir`, `symlink`, ...).
    #[serde(rename = "type")]
    pub kind: String,
}

impl ContentEntry {
    /// Whether this entry is a regular file.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.kind == "file"
    }
}

/// Remote operations the resolution pipeline needs from the hosting
/// platform.
#[async_trait]
pub trait RepoHost {
    /// Repository metadata by owner and name. `NotFound` when the platform
    /// reports no repository under that identity.
    async fn repository(&self, owner: &str, name: &str) -> Result<Lookup<RepositoryMetadata>>;

    /// Public member list of an organization. Inaccessible or missing
    /// lists come back empty so callers can fall back uniformly.
    async fn org_members(&self, org: &str) -> Result<Vec<OrgMember>>;

    /// Author login of the head commit on `branch`, when the platform can
    /// attribute that commit to an account.
    async fn branch_head_author(
        &self,
        owner: &str,
        name: &str,
        branch: &str,
    ) -> Result<Option<String>>;

    /// Top-level directory listing of the repository. `NotFound` mirrors
    /// [`RepoHost::repository`].
    async fn root_listing(&self, owner: &str, name: &str) -> Result<Lookup<Vec<ContentEntry>>>;
}

/// Production [`RepoHost`] backed by the GitHub REST API.
pub struct GitHubClient {
    client: Client,
    api_root: String,
}

impl GitHubClient {
    /// Creates a client for the API at `api_root` authenticating with `token`.
    pub fn new(api_root: impl Into<String>, token: &str) -> Result<Self> {
        Self::with_timeout(api_root, token, Duration::from_secs(30))
    }

    /// Creates a client with a custom request timeout (primarily for tests).
    pub fn with_timeout(
        api_root: impl Into<String>,
        token: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let mut auth = header::HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| Error::Config("API credential is not a valid header value".to_string()))?;
        auth.set_sensitive(true);

        let mut headers = header::HeaderMap::new();
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("plugdex/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .map_err(Error::Network)?;

        let api_root: String = api_root.into();
        Ok(Self {
            client,
            api_root: api_root.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<Lookup<T>> {
        let url = format!("{}{path}", self.api_root);
        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!(%url, "API lookup returned not-found");
            return Ok(Lookup::NotFound);
        }
        let response = response.error_for_status().map_err(Error::Network)?;
        let value = response
            .json::<T>()
            .await
            .map_err(|err| Error::Serialization(err.to_string()))?;
        Ok(Lookup::Found(value))
    }
}

#[derive(Deserialize)]
struct RepoPayload {
    owner: OwnerPayload,
    default_branch: String,
}

#[derive(Deserialize)]
struct OwnerPayload {
    login: String,
    #[serde(rename = "type")]
    kind: OwnerType,
}

#[derive(Deserialize)]
struct CommitPayload {
    author: Option<AuthorPayload>,
}

#[derive(Deserialize)]
struct AuthorPayload {
    login: String,
}

#[async_trait]
impl RepoHost for GitHubClient {
    async fn repository(&self, owner: &str, name: &str) -> Result<Lookup<RepositoryMetadata>> {
        match self.get_json::<RepoPayload>(&format!("/repos/{owner}/{name}")).await? {
            Lookup::Found(payload) => Ok(Lookup::Found(RepositoryMetadata {
                owner_login: payload.owner.login,
                owner_type: payload.owner.kind,
                default_branch: payload.default_branch,
            })),
            Lookup::NotFound => Ok(Lookup::NotFound),
        }
    }

    async fn org_members(&self, org: &str) -> Result<Vec<OrgMember>> {
        let url = format!("{}/orgs/{org}/members", self.api_root);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        // Hidden membership shows up as 403/404; both mean "no usable list".
        if status == StatusCode::NOT_FOUND || status == StatusCode::FORBIDDEN {
            debug!(%url, %status, "member list inaccessible");
            return Ok(Vec::new());
        }
        let response = response.error_for_status().map_err(Error::Network)?;
        response
            .json::<Vec<OrgMember>>()
            .await
            .map_err(|err| Error::Serialization(err.to_string()))
    }

    async fn branch_head_author(
        &self,
        owner: &str,
        name: &str,
        branch: &str,
    ) -> Result<Option<String>> {
        let head = self
            .get_json::<CommitPayload>(&format!("/repos/{owner}/{name}/commits/{branch}"))
            .await?;
        Ok(head
            .found()
            .and_then(|commit| commit.author)
            .map(|author| author.login))
    }

    async fn root_listing(&self, owner: &str, name: &str) -> Result<Lookup<Vec<ContentEntry>>> {
        self.get_json(&format!("/repos/{owner}/{name}/contents")).await
    }
}
