// ABOUTME: Strava JSON API client for segment explore and segment detail
// ABOUTME: Bearer-token GETs with per-client timeout, no retries
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Strava API integration
//!
//! Two documented endpoints: segment explore by bounds and segment detail by
//! id. Each call is a single authenticated GET; failures are logged by the
//! caller and never retried.

use crate::config::StravaApiConfig;
use crate::constants::defaults;
use crate::errors::ProviderError;
use crate::models::{BoundingBox, Segment, SegmentDetail, SegmentExploreResponse};
use crate::providers::SegmentApi;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Strava JSON API client
pub struct StravaApiClient {
    client: Client,
    config: StravaApiConfig,
}

impl StravaApiClient {
    /// Build a client from explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Config`] when the HTTP client cannot be built
    /// with the configured timeouts.
    pub fn new(config: StravaApiConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(defaults::HTTP_CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ProviderError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<T, ProviderError> {
        debug!("Strava API request: {url}");
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.config.access_token)
            .send()
            .await
            .map_err(|e| ProviderError::http(url, e))?
            .error_for_status()
            .map_err(|e| ProviderError::http(url, e))?;

        response
            .json::<T>()
            .await
            .map_err(|e| ProviderError::http(url, e))
    }
}

#[async_trait]
impl SegmentApi for StravaApiClient {
    async fn explore_segments(&self, bounds: BoundingBox) -> Result<Vec<Segment>, ProviderError> {
        let url = format!(
            "{}/segments/explore?bounds={}&activity_type=riding",
            self.config.base_url,
            bounds.to_bounds_param()
        );
        let response: SegmentExploreResponse = self.get_json(&url).await?;
        debug!("Explore returned {} segments", response.segments.len());
        Ok(response.segments)
    }

    async fn get_segment(&self, segment_id: u64) -> Result<SegmentDetail, ProviderError> {
        let url = format!("{}/segments/{segment_id}", self.config.base_url);
        self.get_json(&url).await
    }
}

/// Render a segment for display, one line per segment.
///
/// The platform reports explore distances in meters but the historical
/// rendering labels the raw value "km"; kept as-is for output stability.
#[must_use]
pub fn format_segment(segment: &Segment) -> String {
    format!(
        "Id: {} - Name: {} - Distance: {} km - Average Gradient: {}% - URL: https://www.strava.com/segments/{}",
        segment.id, segment.name, segment.distance, segment.avg_grade, segment.id
    )
}
