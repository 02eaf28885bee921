// ABOUTME: External API client integrations (Strava JSON API, Nominatim geocoding)
// ABOUTME: Trait seams so the tool layer can be tested against stub providers
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! External collaborators
//!
//! Each client is a thin authenticated GET against a documented JSON
//! endpoint. Failures are logged and surfaced as errors; the tool layer
//! decides how to degrade. The traits exist so tools can run against stubs
//! in tests without touching the network.

use crate::errors::{ProviderError, ScraperError};
use crate::models::{BoundingBox, Coordinates, Segment, SegmentDetail};
use async_trait::async_trait;

pub mod nominatim;
pub mod strava;

pub use nominatim::NominatimClient;
pub use strava::StravaApiClient;

/// Segment search and detail lookups against the fitness platform
#[async_trait]
pub trait SegmentApi: Send + Sync {
    /// Find rideable segments within a bounding box.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] on transport failure, non-success status, or
    /// a response body missing the expected fields.
    async fn explore_segments(&self, bounds: BoundingBox) -> Result<Vec<Segment>, ProviderError>;

    /// Fetch the detail/ranking record for a segment.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] on transport failure, non-success status, or
    /// an unparsable response body.
    async fn get_segment(&self, segment_id: u64) -> Result<SegmentDetail, ProviderError>;
}

/// Address-to-coordinates geocoding
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve a street address to a coordinate pair.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] when the request fails or the response
    /// carries no usable hit.
    async fn geocode(&self, address: &str) -> Result<Coordinates, ProviderError>;
}

/// Raw leaderboard markup source for a segment
#[async_trait]
pub trait LeaderboardSource: Send + Sync {
    /// Fetch the current-year leaderboard page body for a segment.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError`] on any fetch failure; callers degrade to an
    /// empty leaderboard.
    async fn fetch_this_year(&self, segment_id: u64) -> Result<String, ScraperError>;
}

#[async_trait]
impl LeaderboardSource for crate::scraper::LeaderboardFetcher {
    async fn fetch_this_year(&self, segment_id: u64) -> Result<String, ScraperError> {
        Self::fetch_this_year(self, segment_id).await
    }
}
