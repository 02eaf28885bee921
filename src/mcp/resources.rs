// ABOUTME: Shared server resources wired once at startup and passed to handlers
// ABOUTME: Holds the provider clients behind their trait seams plus scraper settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Server resources
//!
//! One immutable bundle built at startup. Handlers borrow it; there is no
//! cross-call mutable state anywhere in the server.

use crate::config::{DateMatchMode, ServerConfig};
use crate::providers::{Geocoder, LeaderboardSource, NominatimClient, SegmentApi, StravaApiClient};
use crate::scraper::LeaderboardFetcher;
use anyhow::Result;
use std::sync::Arc;

/// Everything the tool handlers need
pub struct ServerResources {
    /// Segment search and detail client
    pub segment_api: Arc<dyn SegmentApi>,
    /// Address geocoder
    pub geocoder: Arc<dyn Geocoder>,
    /// Leaderboard page source
    pub leaderboard: Arc<dyn LeaderboardSource>,
    /// Date matching behavior for attempt aggregation
    pub date_match: DateMatchMode,
}

impl ServerResources {
    /// Wire the production clients from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when any of the three HTTP clients cannot be built
    /// from its configuration (invalid header or User-Agent values,
    /// unbuildable client).
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        Ok(Self {
            segment_api: Arc::new(StravaApiClient::new(config.strava.clone())?),
            geocoder: Arc::new(NominatimClient::new(&config.nominatim)?),
            leaderboard: Arc::new(LeaderboardFetcher::new(&config.scraper)?),
            date_match: config.scraper.date_match,
        })
    }

    /// Build resources from explicit parts, used by tests to inject stubs
    #[must_use]
    pub fn new(
        segment_api: Arc<dyn SegmentApi>,
        geocoder: Arc<dyn Geocoder>,
        leaderboard: Arc<dyn LeaderboardSource>,
        date_match: DateMatchMode,
    ) -> Self {
        Self {
            segment_api,
            geocoder,
            leaderboard,
            date_match,
        }
    }
}
