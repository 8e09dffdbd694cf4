//! Plain HTTP fetching for the directory page and redirect reconciliation.

use crate::{Error, Result};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

/// HTTP client for the plugin directory page and for observing where a
/// repository web URL ultimately redirects to.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Creates a new fetcher with the default request timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Creates a new fetcher with a custom request timeout (primarily for tests).
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("plugdex/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(Error::Network)?;
        Ok(Self { client })
    }

    /// Fetches the full text of a page.
    pub async fn page_text(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(format!("no page at '{url}'")));
        }
        let response = response.error_for_status().map_err(Error::Network)?;
        let text = response.text().await?;
        debug!(bytes = text.len(), %url, "fetched page");
        Ok(text)
    }

    /// Performs a GET against `url` and reports the final location after
    /// redirects.
    ///
    /// The platform's web frontend follows repository renames with
    /// redirects that its API endpoints do not, so the final URL is the
    /// only place the current owner and name of a moved repository can be
    /// read from.
    pub async fn resolved_location(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let final_url = response.url().to_string();
        debug!(%url, %final_url, status = %response.status(), "resolved final location");
        Ok(final_url)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn page_text_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/plugins"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<a href=\"x\">x</a>"))
            .mount(&server)
            .await;

        let fetcher = Fetcher::new().unwrap();
        let text = fetcher
            .page_text(&format!("{}/plugins", server.uri()))
            .await
            .unwrap();
        assert_eq!(text, "<a href=\"x\">x</a>");
    }

    #[tokio::test]
    async fn page_text_maps_404_to_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let fetcher = Fetcher::new().unwrap();
        let result = fetcher.page_text(&format!("{}/missing", server.uri())).await;
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn resolved_location_follows_redirects() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/old-owner/plugin"))
            .respond_with(
                ResponseTemplate::new(301)
                    .insert_header("location", format!("{}/new-owner/plugin", server.uri())),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/new-owner/plugin"))
            .respond_with(ResponseTemplate::new(200).set_body_string("moved"))
            .mount(&server)
            .await;

        let fetcher = Fetcher::new().unwrap();
        let location = fetcher
            .resolved_location(&format!("{}/old-owner/plugin", server.uri()))
            .await
            .unwrap();
        assert_eq!(location, format!("{}/new-owner/plugin", server.uri()));
    }

    #[tokio::test]
    async fn resolved_location_without_redirect_is_the_original() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/owner/plugin"))
            .respond_with(ResponseTemplate::new(200).set_body_string("here"))
            .mount(&server)
            .await;

        let fetcher = Fetcher::new().unwrap();
        let url = format!("{}/owner/plugin", server.uri());
        assert_eq!(fetcher.resolved_location(&url).await.unwrap(), url);
    }
}
