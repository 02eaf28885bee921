// ABOUTME: HTTP fetcher for segment leaderboard pages
// ABOUTME: One GET per invocation with configured headers/cookies, no retries
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Leaderboard page fetcher
//!
//! Issues a single GET against the segment's leaderboard page with the
//! "this year" filter and partial-render flag. Headers and cookies come from
//! [`ScraperConfig`]; the fetcher attaches them verbatim and knows nothing
//! about their meaning. One attempt per invocation; a caller wanting
//! resilience re-invokes the whole tool.

use crate::config::ScraperConfig;
use crate::constants::defaults;
use crate::errors::ScraperError;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, COOKIE};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Query suffix selecting current-year filtering and partial rendering.
/// Compatibility contract with the page; do not rederive.
const LEADERBOARD_QUERY: &str = "date_range=this_year&filter=current_year&partial=true";

/// Fetches raw leaderboard markup for a segment
pub struct LeaderboardFetcher {
    client: Client,
    web_base_url: String,
}

impl LeaderboardFetcher {
    /// Build a fetcher from explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Config`] when a configured header name or
    /// value is not a valid HTTP header, or the client cannot be built.
    pub fn new(config: &ScraperConfig) -> Result<Self, ScraperError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ScraperError::Config(format!("invalid header name '{name}': {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ScraperError::Config(format!("invalid header value: {e}")))?;
            headers.insert(name, value);
        }
        if !config.cookies.is_empty() {
            let value = HeaderValue::from_str(&config.cookies)
                .map_err(|e| ScraperError::Config(format!("invalid cookie value: {e}")))?;
            headers.insert(COOKIE, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(defaults::HTTP_CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ScraperError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            web_base_url: config.web_base_url.clone(),
        })
    }

    /// Fetch the current-year leaderboard page for a segment and return the
    /// raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Fetch`] on any transport error or non-success
    /// status. Callers must treat that as "leaderboard unavailable", not a
    /// crash.
    pub async fn fetch_this_year(&self, segment_id: u64) -> Result<String, ScraperError> {
        let url = format!(
            "{}/segments/{segment_id}/leaderboard?{LEADERBOARD_QUERY}",
            self.web_base_url
        );
        debug!("Fetching leaderboard page: {url}");

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body = response.text().await?;
        debug!("Leaderboard page for segment {segment_id}: {} bytes", body.len());
        Ok(body)
    }
}
