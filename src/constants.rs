// ABOUTME: Protocol, endpoint, and tool-name constants used across the server
// ABOUTME: Single flat module replacing scattered string literals
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Server-wide constants

/// MCP protocol constants
pub mod protocol {
    /// MCP protocol version implemented by this server
    pub const MCP_PROTOCOL_VERSION: &str = "2024-11-05";

    /// Server name advertised during initialize
    pub const SERVER_NAME: &str = "strava-segments";

    /// Server version advertised during initialize
    pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// Tool names exposed over `tools/list`
pub mod tools {
    /// Geocode a street address to latitude/longitude
    pub const GET_LATITUDE_AND_LONGITUDE: &str = "get_latitude_and_longitude";

    /// Build a rectangular search area around a coordinate
    pub const DEFINE_RECTANGULAR_AREA: &str = "define_rectangular_area";

    /// Strava segment explore within a bounding box
    pub const GET_NEARBY_SEGMENTS: &str = "get_nearby_segments";

    /// Segment detail/ranking lookup by id
    pub const GET_SEGMENT_DETAILS: &str = "get_segment_details";

    /// Leaderboard scrape with attempt aggregation
    pub const GET_NUMBER_OF_CLIMB_ATTEMPTS_ON_THE_YEAR: &str =
        "get_number_of_climb_attempts_on_the_year";
}

/// Prompt names exposed over `prompts/list`
pub mod prompts {
    /// Guided segment search starting from a street address
    pub const FIND_SEGMENTS_BY_ADDRESS: &str = "find-segments-by-address";

    /// Segment search from explicit bounding-box coordinates
    pub const FIND_SEGMENTS_BY_COORDINATES: &str = "find-segments-by-coordinates";
}

/// Default external endpoints and request shaping
pub mod defaults {
    /// Strava JSON API base
    pub const STRAVA_API_BASE: &str = "https://www.strava.com/api/v3";

    /// Strava website base, used for segment pages and leaderboard scraping
    pub const STRAVA_WEB_BASE: &str = "https://www.strava.com";

    /// Nominatim geocoding API base
    pub const NOMINATIM_API_BASE: &str = "https://nominatim.openstreetmap.org";

    /// Per-request timeout ceiling in seconds (a single bounded wait, not a retry loop)
    pub const HTTP_TIMEOUT_SECS: u64 = 30;

    /// Connect-phase timeout in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Default bounding-box radius in kilometers
    pub const SEARCH_RADIUS_KM: f64 = 10.0;

    /// User-Agent sent on scrape and geocoding requests
    pub const USER_AGENT: &str = concat!("strava-mcp-server/", env!("CARGO_PKG_VERSION"));
}

/// JSON field names shared between tool schemas and handlers
pub mod json_fields {
    /// Street address input
    pub const ADDRESS: &str = "address";
    /// Segment identifier input
    pub const SEGMENT_ID: &str = "segment_id";
    /// Latitude of a point or box corner
    pub const LATITUDE: &str = "latitude";
    /// Longitude of a point or box corner
    pub const LONGITUDE: &str = "longitude";
    /// Search radius in kilometers
    pub const DISTANCE: &str = "distance";
    /// Southwest corner latitude
    pub const SOUTHWEST_LATITUDE: &str = "southwest_latitude";
    /// Southwest corner longitude
    pub const SOUTHWEST_LONGITUDE: &str = "southwest_longitude";
    /// Northeast corner latitude
    pub const NORTHEAST_LATITUDE: &str = "northeast_latitude";
    /// Northeast corner longitude
    pub const NORTHEAST_LONGITUDE: &str = "northeast_longitude";
}
