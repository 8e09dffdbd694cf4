//! In-memory [`RepoHost`] for unit tests that need no HTTP server.

use crate::github::{ContentEntry, Lookup, OrgMember, RepoHost, RepositoryMetadata};
use crate::Result;
use async_trait::async_trait;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub(crate) struct FakeHost {
    pub repos: HashMap<(String, String), RepositoryMetadata>,
    pub members: HashMap<String, Vec<OrgMember>>,
    pub head_authors: HashMap<(String, String), Option<String>>,
    pub listings: HashMap<(String, String), Vec<ContentEntry>>,
}

impl FakeHost {
    pub fn repo(
        mut self,
        owner: &str,
        name: &str,
        metadata: RepositoryMetadata,
    ) -> Self {
        self.repos
            .insert((owner.to_string(), name.to_string()), metadata);
        self
    }

    pub fn org(mut self, org: &str, members: Vec<OrgMember>) -> Self {
        self.members.insert(org.to_string(), members);
        self
    }

    pub fn head_author(mut self, owner: &str, name: &str, author: Option<&str>) -> Self {
        self.head_authors.insert(
            (owner.to_string(), name.to_string()),
            author.map(ToString::to_string),
        );
        self
    }

    pub fn listing(mut self, owner: &str, name: &str, entries: Vec<(&str, &str)>) -> Self {
        self.listings.insert(
            (owner.to_string(), name.to_string()),
            entries
                .into_iter()
                .map(|(path, kind)| ContentEntry {
                    path: path.to_string(),
                    kind: kind.to_string(),
                })
                .collect(),
        );
        self
    }
}

#[async_trait]
impl RepoHost for FakeHost {
    async fn repository(&self, owner: &str, name: &str) -> Result<Lookup<RepositoryMetadata>> {
        Ok(match self.repos.get(&(owner.to_string(), name.to_string())) {
            Some(metadata) => Lookup::Found(metadata.clone()),
            None => Lookup::NotFound,
        })
    }

    async fn org_members(&self, org: &str) -> Result<Vec<OrgMember>> {
        Ok(self.members.get(org).cloned().unwrap_or_default())
    }

    async fn branch_head_author(
        &self,
        owner: &str,
        name: &str,
        _branch: &str,
    ) -> Result<Option<String>> {
        Ok(self
            .head_authors
            .get(&(owner.to_string(), name.to_string()))
            .cloned()
            .flatten())
    }

    async fn root_listing(&self, owner: &str, name: &str) -> Result<Lookup<Vec<ContentEntry>>> {
        Ok(
            match self.listings.get(&(owner.to_string(), name.to_string())) {
                Some(entries) => Lookup::Found(entries.clone()),
                None => Lookup::NotFound,
            },
        )
    }
}
