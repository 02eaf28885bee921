// ABOUTME: Core data types for leaderboard entries, attempt counts, and segments
// ABOUTME: Immutable value types shared between the scraper, providers, and tools
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Data model
//!
//! All types here are plain values. Leaderboard collections are rebuilt fresh
//! on every fetch; nothing is cached or mutated in place.

use serde::{Deserialize, Serialize};

/// One ranked attempt record from a segment leaderboard page.
///
/// The column set advertised by the page's table header determines which
/// optional fields are populated. Numeric cells that cannot be parsed are
/// stored as `None`, never zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1-based rank as displayed on the page
    pub rank: u32,
    /// Athlete display name; empty when the row has no profile link
    pub athlete_name: String,
    /// Athlete id from the profile link path; empty when no link is present
    pub athlete_id: String,
    /// Attempt date exactly as rendered by the page (free text, not normalized)
    pub date: String,
    /// Effort id from the effort link path; empty when absent
    pub effort_id: String,
    /// Average speed with the " km/h" suffix stripped
    pub speed_kmh: Option<f64>,
    /// Heart rate with the " bpm" suffix stripped
    pub heart_rate_bpm: Option<f64>,
    /// Power with the " W" suffix and placeholder dashes stripped
    pub power_watts: Option<f64>,
    /// Vertical ascent rate; present only when the page includes a VAM column
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vam: Option<f64>,
    /// Elapsed time text, always taken from the last table column
    pub time: String,
}

/// Rolling attempt counts for a segment, relative to an injected reference
/// instant. Computed, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptCounts {
    /// Attempts whose date matches the reference instant's month
    pub last_month_attempts: u32,
    /// Attempts whose date matches the reference instant's year
    pub year_to_date_attempts: u32,
}

impl AttemptCounts {
    /// Zero counts, used when the leaderboard is unavailable or empty
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            last_month_attempts: 0,
            year_to_date_attempts: 0,
        }
    }
}

/// A geographic point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

/// A southwest/northeast coordinate pair delimiting a search rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Southwest corner
    pub southwest: Coordinates,
    /// Northeast corner
    pub northeast: Coordinates,
}

impl BoundingBox {
    /// Render the box as the `sw_lat,sw_lng,ne_lat,ne_lng` form the Strava
    /// explore endpoint expects.
    #[must_use]
    pub fn to_bounds_param(&self) -> String {
        format!(
            "{},{},{},{}",
            self.southwest.latitude,
            self.southwest.longitude,
            self.northeast.latitude,
            self.northeast.longitude
        )
    }
}

/// A segment as returned by the Strava explore endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Segment identifier
    pub id: u64,
    /// Segment name
    pub name: String,
    /// Distance as reported by the platform
    pub distance: f64,
    /// Average gradient in percent
    pub avg_grade: f64,
    /// Climb category (0 = uncategorized)
    #[serde(default)]
    pub climb_category: u8,
    /// Elevation difference in meters, when reported
    #[serde(default)]
    pub elev_difference: Option<f64>,
}

/// Wire shape of the explore response
#[derive(Debug, Deserialize)]
pub struct SegmentExploreResponse {
    /// Matching segments, possibly empty
    pub segments: Vec<Segment>,
}

/// Detailed segment record from `GET /segments/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentDetail {
    /// Segment identifier
    pub id: u64,
    /// Segment name
    pub name: String,
    /// Distance in meters
    pub distance: f64,
    /// Average gradient in percent
    pub average_grade: f64,
    /// Maximum gradient in percent
    #[serde(default)]
    pub maximum_grade: Option<f64>,
    /// Total recorded efforts on this segment
    #[serde(default)]
    pub effort_count: Option<u64>,
    /// Distinct athletes who attempted this segment
    #[serde(default)]
    pub athlete_count: Option<u64>,
    /// Stars given by athletes
    #[serde(default)]
    pub star_count: Option<u64>,
    /// City the segment is located in
    #[serde(default)]
    pub city: Option<String>,
    /// State or region
    #[serde(default)]
    pub state: Option<String>,
}
