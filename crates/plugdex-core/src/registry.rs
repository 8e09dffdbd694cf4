//! In-memory registry of discovered plugins.

use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

/// A fully resolved plugin record. Immutable once registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plugin {
    /// Repository name, confirmed by the platform.
    pub name: String,
    /// Ordered, deduplicated author handles. Never empty.
    pub authors: Vec<String>,
    /// Web URL of the owning account.
    pub owner_url: String,
    /// Canonical repository URL; unique across the registry.
    pub url: String,
    /// Extension points the plugin provides as top-level files.
    pub types: BTreeSet<String>,
}

/// Append-only collection of plugins, deduplicated by canonical URL.
///
/// The registry is write-once-per-key and read-many: there is no deletion
/// or mutation, and every query returns records in registration order.
#[derive(Debug, Default)]
pub struct PluginRegistry {
    plugins: Vec<Plugin>,
    urls: HashSet<String>,
}

impl PluginRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `plugin` keyed by its canonical URL. A second registration
    /// with the same URL is a no-op; the first-seen record wins. Returns
    /// whether the plugin was inserted.
    pub fn register(&mut self, plugin: Plugin) -> bool {
        if self.urls.contains(&plugin.url) {
            return false;
        }
        self.urls.insert(plugin.url.clone());
        self.plugins.push(plugin);
        true
    }

    /// Plugins whose name matches `name` exactly, in registration order.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Vec<&Plugin> {
        self.plugins
            .iter()
            .filter(|plugin| plugin.name == name)
            .collect()
    }

    /// Plugins providing at least one of `types`, each appearing at most
    /// once, in registration order.
    #[must_use]
    pub fn find_by_types(&self, types: &[String]) -> Vec<&Plugin> {
        self.plugins
            .iter()
            .filter(|plugin| types.iter().any(|wanted| plugin.types.contains(wanted)))
            .collect()
    }

    /// Registration-order snapshot of everything discovered so far.
    #[must_use]
    pub fn list_all(&self) -> &[Plugin] {
        &self.plugins
    }

    /// Number of registered plugins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Whether the registry holds no plugins.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}
