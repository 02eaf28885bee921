// ABOUTME: Nominatim geocoding client resolving street addresses to coordinates
// ABOUTME: Single unauthenticated GET per lookup with a mandatory User-Agent
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Nominatim geocoder
//!
//! Takes the first hit of a `/search?format=json` query. Unlike the segment
//! tools, a failed or empty geocode is a real error: there is no sensible
//! degraded answer for "where is this address".

use crate::config::NominatimConfig;
use crate::constants::defaults;
use crate::errors::ProviderError;
use crate::models::Coordinates;
use crate::providers::Geocoder;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// One search hit; Nominatim renders coordinates as strings
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

/// Nominatim API client
pub struct NominatimClient {
    client: Client,
    base_url: String,
}

impl NominatimClient {
    /// Build a client from explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Config`] when the configured User-Agent is not
    /// a valid header value or the HTTP client cannot be built. The User-Agent
    /// and the request timeout are both mandatory here, so a builder failure
    /// must not degrade to a default client.
    pub fn new(config: &NominatimConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(defaults::HTTP_CONNECT_TIMEOUT_SECS))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| ProviderError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }
}

#[async_trait]
impl Geocoder for NominatimClient {
    async fn geocode(&self, address: &str) -> Result<Coordinates, ProviderError> {
        let mut url = Url::parse(&format!("{}/search", self.base_url))
            .map_err(|e| ProviderError::unexpected(&self.base_url, e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("q", address)
            .append_pair("format", "json");
        let url = url.to_string();

        debug!("Geocoding address via {url}");
        let places: Vec<NominatimPlace> = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::http(&url, e))?
            .error_for_status()
            .map_err(|e| ProviderError::http(&url, e))?
            .json()
            .await
            .map_err(|e| ProviderError::http(&url, e))?;

        let first = places
            .first()
            .ok_or_else(|| ProviderError::unexpected(&url, "no geocoding hits for address"))?;

        let latitude = first
            .lat
            .parse::<f64>()
            .map_err(|e| ProviderError::unexpected(&url, format!("bad latitude: {e}")))?;
        let longitude = first
            .lon
            .parse::<f64>()
            .map_err(|e| ProviderError::unexpected(&url, format!("bad longitude: {e}")))?;

        debug!("Geocoded to {latitude}, {longitude}");
        Ok(Coordinates {
            latitude,
            longitude,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_user_agent_is_a_config_error() {
        let config = NominatimConfig {
            user_agent: "bad\nagent".into(),
            ..NominatimConfig::default()
        };
        assert!(matches!(
            NominatimClient::new(&config),
            Err(ProviderError::Config(_))
        ));
    }

    #[test]
    fn default_configuration_builds() {
        assert!(NominatimClient::new(&NominatimConfig::default()).is_ok());
    }
}
