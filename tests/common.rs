// ABOUTME: Shared test utilities and HTML fixture builders for integration tests
// ABOUTME: Provides leaderboard page construction and quiet logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::must_use_candidate,
    clippy::missing_panics_doc
)]

//! Shared test utilities for `strava_mcp_server`

use async_trait::async_trait;
use std::sync::{Arc, Once};
use strava_mcp_server::config::DateMatchMode;
use strava_mcp_server::errors::{ProviderError, ScraperError};
use strava_mcp_server::mcp::ServerResources;
use strava_mcp_server::models::{BoundingBox, Coordinates, Segment, SegmentDetail};
use strava_mcp_server::providers::{Geocoder, LeaderboardSource, SegmentApi};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard leaderboard header columns, as rendered on segment pages
pub const STANDARD_COLUMNS: &[&str] = &["Rank", "Athlete", "Date", "Speed", "HR", "Power", "Time"];

/// One synthetic leaderboard row
pub struct RowFixture {
    pub rank: &'static str,
    pub athlete: Option<(&'static str, &'static str)>,
    pub effort: Option<(&'static str, &'static str)>,
    pub speed: &'static str,
    pub heart_rate: &'static str,
    pub power: &'static str,
    pub time: &'static str,
}

impl RowFixture {
    /// A complete, well-formed row
    pub fn complete(date: &'static str) -> Self {
        Self {
            rank: "1",
            athlete: Some(("athletes/12345", "Jane Climber")),
            effort: Some(("segment_efforts/987654", date)),
            speed: "32.4 km/h",
            heart_rate: "165 bpm",
            power: "280 W",
            time: "4:31",
        }
    }

    fn render(&self) -> String {
        let athlete_cell = match self.athlete {
            Some((href, name)) => format!("<a href=\"/{href}\">{name}</a>"),
            None => String::new(),
        };
        let effort_cell = match self.effort {
            Some((href, date)) => format!("<a href=\"/{href}\">{date}</a>"),
            None => String::new(),
        };
        format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            self.rank, athlete_cell, effort_cell, self.speed, self.heart_rate, self.power, self.time
        )
    }
}

/// Build a leaderboard page with the given header columns and pre-rendered rows
pub fn page_with_rows(columns: &[&str], rows: &[String]) -> String {
    let header: String = columns
        .iter()
        .map(|name| format!("<th>{name}</th>"))
        .collect();
    format!(
        "<div class=\"leaderboard\"><table>\
         <thead><tr class=\"header-row\">{header}</tr></thead>\
         <tbody>{}</tbody></table></div>",
        rows.join("")
    )
}

/// Build a standard 7-column page from row fixtures
pub fn standard_page(rows: &[RowFixture]) -> String {
    let rendered: Vec<String> = rows.iter().map(RowFixture::render).collect();
    page_with_rows(STANDARD_COLUMNS, &rendered)
}

/// A page with dated rows only: each entry becomes a complete row with the
/// given date text
pub fn page_with_dates(dates: &[&'static str]) -> String {
    let rows: Vec<RowFixture> = dates.iter().map(|&date| RowFixture::complete(date)).collect();
    standard_page(&rows)
}

// ---------------------------------------------------------------------------
// Stub providers for exercising the tool layer without the network
// ---------------------------------------------------------------------------

/// Segment API stub; `None` simulates a failed request
pub struct StubSegmentApi {
    pub segments: Option<Vec<Segment>>,
    pub detail: Option<SegmentDetail>,
}

#[async_trait]
impl SegmentApi for StubSegmentApi {
    async fn explore_segments(&self, _bounds: BoundingBox) -> Result<Vec<Segment>, ProviderError> {
        self.segments
            .clone()
            .ok_or_else(|| ProviderError::unexpected("stub", "explore failed"))
    }

    async fn get_segment(&self, _segment_id: u64) -> Result<SegmentDetail, ProviderError> {
        self.detail
            .clone()
            .ok_or_else(|| ProviderError::unexpected("stub", "detail failed"))
    }
}

/// Geocoder stub; `None` simulates no hits
pub struct StubGeocoder {
    pub coordinates: Option<Coordinates>,
}

#[async_trait]
impl Geocoder for StubGeocoder {
    async fn geocode(&self, _address: &str) -> Result<Coordinates, ProviderError> {
        self.coordinates
            .ok_or_else(|| ProviderError::unexpected("stub", "no geocoding hits"))
    }
}

/// Leaderboard stub serving canned markup; `None` simulates a fetch failure
pub struct StubLeaderboard {
    pub html: Option<String>,
}

#[async_trait]
impl LeaderboardSource for StubLeaderboard {
    async fn fetch_this_year(&self, _segment_id: u64) -> Result<String, ScraperError> {
        self.html
            .clone()
            .ok_or_else(|| ScraperError::Config("stub fetch failure".into()))
    }
}

/// Wire stub providers into server resources
pub fn stub_resources(
    segments: Option<Vec<Segment>>,
    coordinates: Option<Coordinates>,
    html: Option<String>,
    date_match: DateMatchMode,
) -> ServerResources {
    ServerResources::new(
        Arc::new(StubSegmentApi {
            segments,
            detail: None,
        }),
        Arc::new(StubGeocoder { coordinates }),
        Arc::new(StubLeaderboard { html }),
        date_match,
    )
}

/// Wire stub providers where only the segment-detail lookup matters
pub fn stub_resources_with_detail(detail: Option<SegmentDetail>) -> ServerResources {
    ServerResources::new(
        Arc::new(StubSegmentApi {
            segments: None,
            detail,
        }),
        Arc::new(StubGeocoder { coordinates: None }),
        Arc::new(StubLeaderboard { html: None }),
        DateMatchMode::Substring,
    )
}

/// A plausible explore-result segment
pub fn sample_segment(id: u64, name: &str) -> Segment {
    Segment {
        id,
        name: name.to_owned(),
        distance: 4.2,
        avg_grade: 7.5,
        climb_category: 2,
        elev_difference: Some(315.0),
    }
}

/// A plausible segment detail record
pub fn sample_detail(id: u64, name: &str) -> SegmentDetail {
    SegmentDetail {
        id,
        name: name.to_owned(),
        distance: 4200.0,
        average_grade: 7.5,
        maximum_grade: Some(12.1),
        effort_count: Some(15_203),
        athlete_count: Some(3_118),
        star_count: Some(402),
        city: Some("Grenoble".into()),
        state: Some("Isere".into()),
    }
}
