//! HTTP page fetcher for the listing site's search result pages.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::Client;

use crate::error::ScraperError;
use crate::pagination::PageTarget;

/// Fetches result pages over a single reusable connection pool.
///
/// Every request carries the same browser-like header profile, set once at
/// construction. A fixed pause is taken before each request, including the
/// first; there is no retry, so any failure is returned to the caller as-is.
#[derive(Debug)]
pub struct ListingClient {
    client: Client,
    page_delay: Duration,
}

impl ListingClient {
    /// Creates a `ListingClient` with explicit timeouts, `User-Agent`, and
    /// pacing delay.
    ///
    /// `timeout_secs` bounds a whole request including the body read;
    /// `connect_timeout_secs` bounds connection establishment alone.
    /// `page_delay_ms` is slept before every request; `0` disables it.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., an invalid `User-Agent` value).
    pub fn new(
        timeout_secs: u64,
        connect_timeout_secs: u64,
        user_agent: &str,
        page_delay_ms: u64,
    ) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .user_agent(user_agent)
            .default_headers(browser_headers())
            .build()?;
        Ok(Self {
            client,
            page_delay: Duration::from_millis(page_delay_ms),
        })
    }

    /// Fetches one results page and returns its HTML body.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::NotFound`]: HTTP 404, the site's end-of-results signal.
    /// - [`ScraperError::UnexpectedStatus`]: any other non-2xx status.
    /// - [`ScraperError::Http`]: network, TLS, or timeout failure.
    pub async fn fetch_page(&self, target: &PageTarget) -> Result<String, ScraperError> {
        if !self.page_delay.is_zero() {
            tokio::time::sleep(self.page_delay).await;
        }

        let url = target.url();
        tracing::debug!(url, start_index = target.start_index(), "fetching results page");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ScraperError::NotFound {
                url: url.to_owned(),
            });
        }

        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await?;
        tracing::debug!(url, status = status.as_u16(), bytes = body.len(), "page fetched");
        Ok(body)
    }
}

/// Headers sent alongside the `User-Agent` so requests look like a browser
/// navigation rather than a bare HTTP client.
fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
    );
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static("pt-BR,pt;q=0.9,en-US;q=0.8,en;q=0.7"),
    );
    headers
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
