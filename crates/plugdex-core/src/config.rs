//! Runtime settings resolved from built-in defaults and the environment.
//!
//! The only hard requirement is the platform API credential: discovery
//! makes authenticated API calls for every candidate, and a missing
//! credential aborts the run at startup instead of failing one candidate
//! at a time. The directory page URL, API root, and publisher name are
//! overridable so tests and mirrors can point the pipeline elsewhere.

use crate::{Error, Result};

/// Directory page listing community plugins.
pub const DEFAULT_DIRECTORY_URL: &str = "https://progrium.viewdocs.io/dokku/plugins";

/// Root of the platform REST API.
pub const DEFAULT_API_ROOT: &str = "https://api.github.com";

/// Account name publishing the directory page. Links that reference it
/// are self-referential and never plugin candidates.
pub const DEFAULT_PUBLISHER: &str = "progrium";

/// Environment variable holding the platform API credential.
pub const TOKEN_ENV: &str = "GH_TOKEN";

const DIRECTORY_URL_ENV: &str = "PLUGDEX_DIRECTORY_URL";
const API_ROOT_ENV: &str = "PLUGDEX_API_ROOT";
const PUBLISHER_ENV: &str = "PLUGDEX_PUBLISHER";

/// Settings for one discovery run.
#[derive(Debug, Clone)]
pub struct Settings {
    /// URL of the plugin directory page to scrape.
    pub directory_url: String,
    /// Base URL of the platform REST API, without a trailing slash.
    pub api_root: String,
    /// Publisher account name used to drop self-referential links.
    pub publisher: String,
    /// Platform API credential.
    pub token: String,
}

impl Settings {
    /// Settings with built-in defaults and the given credential.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            directory_url: DEFAULT_DIRECTORY_URL.to_string(),
            api_root: DEFAULT_API_ROOT.to_string(),
            publisher: DEFAULT_PUBLISHER.to_string(),
            token: token.into(),
        }
    }

    /// Resolves settings from the process environment.
    ///
    /// `GH_TOKEN` is required; `PLUGDEX_DIRECTORY_URL`, `PLUGDEX_API_ROOT`
    /// and `PLUGDEX_PUBLISHER` override the defaults when present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the credential is absent or blank.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(TOKEN_ENV)
            .map_err(|_| Error::Config(format!("set the {TOKEN_ENV} environment variable")))?;
        if token.trim().is_empty() {
            return Err(Error::Config(format!(
                "the {TOKEN_ENV} environment variable is empty"
            )));
        }

        let mut settings = Self::new(token);
        if let Ok(url) = std::env::var(DIRECTORY_URL_ENV) {
            settings.directory_url = url;
        }
        if let Ok(root) = std::env::var(API_ROOT_ENV) {
            settings.api_root = root.trim_end_matches('/').to_string();
        }
        if let Ok(publisher) = std::env::var(PUBLISHER_ENV) {
            settings.publisher = publisher;
        }
        Ok(settings)
    }
}
