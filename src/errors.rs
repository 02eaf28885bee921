// ABOUTME: Error types for the scraping and provider layers
// ABOUTME: Defines ScraperError and ProviderError with thiserror, no panics in library code
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error taxonomy
//!
//! Nothing in this crate is fatal to the hosting process. A failed fetch
//! degrades to "no entries" at the tool layer; malformed rows are dropped by
//! the parser; unparsable numeric cells become absent values. The types here
//! exist so the library API keeps the distinction even where the tool surface
//! conflates it.

use thiserror::Error;

/// Errors from the leaderboard fetch path
#[derive(Debug, Error)]
pub enum ScraperError {
    /// Transport failure or non-success HTTP status on the leaderboard page
    #[error("leaderboard fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Scraper configuration could not be turned into an HTTP client
    #[error("invalid scraper configuration: {0}")]
    Config(String),
}

/// Errors from the JSON API clients (Strava, Nominatim)
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport failure or non-success HTTP status
    #[error("request to {endpoint} failed: {source}")]
    Http {
        /// Endpoint the request was issued against
        endpoint: String,
        /// Underlying reqwest error
        #[source]
        source: reqwest::Error,
    },

    /// Response body did not match the expected JSON shape
    #[error("unexpected response from {endpoint}: {message}")]
    UnexpectedResponse {
        /// Endpoint the response came from
        endpoint: String,
        /// What was missing or malformed
        message: String,
    },

    /// Client configuration could not be turned into an HTTP client
    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl ProviderError {
    /// Wrap a reqwest error with the endpoint it came from
    #[must_use]
    pub fn http(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Http {
            endpoint: endpoint.into(),
            source,
        }
    }

    /// Build an unexpected-response error
    #[must_use]
    pub fn unexpected(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::UnexpectedResponse {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }
}
