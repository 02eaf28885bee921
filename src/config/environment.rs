// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment-based configuration
//!
//! Everything the HTTP clients need (tokens, endpoints, scrape headers and
//! cookies, timeouts) is loaded here and passed into constructors explicitly.
//! No component reads the environment at request time.

use crate::constants::defaults;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;

/// How the attempt aggregator matches leaderboard dates against "now"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateMatchMode {
    /// Substring containment against the free-text date field, exactly as the
    /// source page behaves: an entry counts toward the month when its date
    /// text contains the abbreviated month name, toward the year when it
    /// contains the four-digit year. Known to overcount when those strings
    /// appear for unrelated reasons.
    #[default]
    Substring,
    /// Parse the date text and compare real calendar month/year. Entries
    /// whose dates cannot be parsed are not counted.
    CalendarRange,
}

impl DateMatchMode {
    /// Parse from an environment string, warning on unknown values
    #[must_use]
    pub fn from_env_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "calendar-range" | "calendar_range" | "calendar" => Self::CalendarRange,
            "substring" => Self::Substring,
            other => {
                warn!("Unknown STRAVA_SCRAPER_DATE_MATCH value '{other}', using substring");
                Self::Substring
            }
        }
    }
}

/// Strava JSON API client configuration
#[derive(Debug, Clone)]
pub struct StravaApiConfig {
    /// API base URL
    pub base_url: String,
    /// Bearer token for authenticated endpoints
    pub access_token: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for StravaApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::STRAVA_API_BASE.into(),
            access_token: String::new(),
            timeout_secs: defaults::HTTP_TIMEOUT_SECS,
        }
    }
}

/// Leaderboard page scraper configuration.
///
/// Headers and cookies are opaque session-shaping values owned by deployment
/// configuration; the fetcher attaches them verbatim.
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// Strava website base URL (segment pages live under `<base>/segments/<id>`)
    pub web_base_url: String,
    /// Extra request headers as `name: value` pairs
    pub headers: Vec<(String, String)>,
    /// Cookie header value; empty means no cookie is sent
    pub cookies: String,
    /// Per-request timeout in seconds (single bounded wait, no retries)
    pub timeout_secs: u64,
    /// Date matching behavior for attempt aggregation
    pub date_match: DateMatchMode,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            web_base_url: defaults::STRAVA_WEB_BASE.into(),
            headers: vec![
                ("User-Agent".into(), defaults::USER_AGENT.into()),
                (
                    "Accept".into(),
                    "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8".into(),
                ),
                ("X-Requested-With".into(), "XMLHttpRequest".into()),
            ],
            cookies: String::new(),
            timeout_secs: defaults::HTTP_TIMEOUT_SECS,
            date_match: DateMatchMode::default(),
        }
    }
}

/// Nominatim geocoding client configuration
#[derive(Debug, Clone)]
pub struct NominatimConfig {
    /// API base URL
    pub base_url: String,
    /// User-Agent sent on every request, required by the Nominatim usage policy
    pub user_agent: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::NOMINATIM_API_BASE.into(),
            user_agent: defaults::USER_AGENT.into(),
            timeout_secs: defaults::HTTP_TIMEOUT_SECS,
        }
    }
}

/// Top-level server configuration
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// Strava JSON API settings
    pub strava: StravaApiConfig,
    /// Leaderboard scraper settings
    pub scraper: ScraperConfig,
    /// Nominatim geocoder settings
    pub nominatim: NominatimConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// # Errors
    ///
    /// Returns an error when a numeric variable is set but unparsable.
    pub fn from_env() -> Result<Self> {
        let timeout_secs = parse_timeout("STRAVA_HTTP_TIMEOUT_SECS")?;

        let strava = StravaApiConfig {
            base_url: env_or("STRAVA_API_BASE", defaults::STRAVA_API_BASE),
            access_token: env::var("STRAVA_ACCESS_TOKEN").unwrap_or_default(),
            timeout_secs,
        };

        let mut scraper = ScraperConfig {
            web_base_url: env_or("STRAVA_WEB_BASE", defaults::STRAVA_WEB_BASE),
            timeout_secs,
            cookies: env::var("STRAVA_SCRAPER_COOKIES").unwrap_or_default(),
            ..ScraperConfig::default()
        };
        if let Ok(mode) = env::var("STRAVA_SCRAPER_DATE_MATCH") {
            scraper.date_match = DateMatchMode::from_env_str(&mode);
        }
        if let Ok(ua) = env::var("STRAVA_SCRAPER_USER_AGENT") {
            for header in &mut scraper.headers {
                if header.0.eq_ignore_ascii_case("user-agent") {
                    header.1.clone_from(&ua);
                }
            }
        }

        let nominatim = NominatimConfig {
            base_url: env_or("NOMINATIM_API_BASE", defaults::NOMINATIM_API_BASE),
            user_agent: env_or("NOMINATIM_USER_AGENT", defaults::USER_AGENT),
            timeout_secs,
        };

        if strava.access_token.is_empty() {
            warn!("STRAVA_ACCESS_TOKEN is not set; segment search and detail tools will fail");
        }

        Ok(Self {
            strava,
            scraper,
            nominatim,
        })
    }

    /// One-line summary for startup logging; never includes secrets
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "api={} web={} nominatim={} timeout={}s date_match={:?} token={}",
            self.strava.base_url,
            self.scraper.web_base_url,
            self.nominatim.base_url,
            self.strava.timeout_secs,
            self.scraper.date_match,
            if self.strava.access_token.is_empty() {
                "unset"
            } else {
                "set"
            }
        )
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.into())
}

fn parse_timeout(key: &str) -> Result<u64> {
    match env::var(key) {
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|e| anyhow::anyhow!("invalid {key}={raw}: {e}")),
        Err(_) => Ok(defaults::HTTP_TIMEOUT_SECS),
    }
}
