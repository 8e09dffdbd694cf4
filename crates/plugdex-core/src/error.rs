//! Error types and result alias for plugdex-core operations.
//!
//! Faults fall into two groups: configuration problems that abort a run
//! before any network traffic happens, and per-candidate resolution faults
//! that skip a single repository while discovery continues. Use
//! [`Error::is_candidate_skip`] to tell the groups apart at the pipeline
//! boundary and [`Error::category`] for a stable identifier in log lines
//! and skip summaries.

use thiserror::Error;

/// The error type for all plugdex-core operations.
///
/// All public functions in plugdex-core return `Result<T, Error>`. The
/// variants mirror the stages of the discovery pipeline: transport faults,
/// startup configuration faults, and the three per-candidate resolution
/// faults that skip a repository without aborting the run.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport failure while talking to the directory page or the
    /// platform API. The underlying `reqwest::Error` is preserved.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Required configuration is missing or invalid.
    ///
    /// Raised once at startup (for example when the API credential is
    /// absent) and aborts the run before any remote call is made.
    #[error("configuration error: {0}")]
    Config(String),

    /// A fetched document could not be interpreted.
    #[error("parse error: {0}")]
    Parse(String),

    /// A JSON payload from the platform API failed to decode.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A resource outside any candidate's retry protocol was missing,
    /// such as the directory page itself.
    #[error("not found: {0}")]
    NotFound(String),

    /// Repository identity could not be confirmed even after the
    /// redirect-retry. The candidate is skipped; the run continues.
    #[error("could not resolve repository '{name}' referenced by {url}")]
    ResolutionFailed {
        /// Originally scraped repository URL.
        url: String,
        /// Repository name guessed from that URL.
        name: String,
    },

    /// The root directory listing was unattainable after the
    /// redirect-retry. The candidate is skipped; the run continues.
    #[error("could not classify repository at {url}: {reason}")]
    ClassificationFailed {
        /// Canonical URL of the repository that failed to classify.
        url: String,
        /// What the platform reported.
        reason: String,
    },

    /// The organization has no usable members and the default-branch head
    /// commit carries no attributable author either.
    #[error("no authors could be determined for {repo}")]
    AuthorResolutionExhausted {
        /// `owner/name` of the repository.
        repo: String,
    },
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl Error {
    /// Stable identifier for grouping log lines and skip summaries.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Config(_) => "config",
            Self::Parse(_) => "parse",
            Self::Serialization(_) => "serialization",
            Self::NotFound(_) => "not_found",
            Self::ResolutionFailed { .. } => "resolution_failed",
            Self::ClassificationFailed { .. } => "classification_failed",
            Self::AuthorResolutionExhausted { .. } => "authors_exhausted",
        }
    }

    /// Whether this fault skips a single candidate rather than aborting
    /// the whole discovery run.
    #[must_use]
    pub const fn is_candidate_skip(&self) -> bool {
        matches!(
            self,
            Self::ResolutionFailed { .. }
                | Self::ClassificationFailed { .. }
                | Self::AuthorResolutionExhausted { .. }
        )
    }
}

/// Convenience alias for `std::result::Result<T, Error>` used throughout
/// plugdex-core.
pub type Result<T> = std::result::Result<T, Error>;
