// ABOUTME: Tool implementations executed by tools/call
// ABOUTME: Argument parsing, provider calls, and degraded-answer policy per tool
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tool handlers
//!
//! Every handler returns a well-formed [`ToolResponse`]; nothing here can
//! crash the server. Segment tools degrade to sentinel text on provider
//! failure, and the climb-attempt tool degrades to zero counts when the
//! leaderboard cannot be fetched. Only bad arguments and failed geocodes
//! surface as tool errors.

use crate::constants::{json_fields, tools};
use crate::mcp::schema::{ToolCall, ToolResponse};
use crate::mcp::ServerResources;
use crate::models::{AttemptCounts, BoundingBox, Coordinates};
use crate::providers::strava::format_segment;
use crate::scraper::{count_attempts, parse_leaderboard};
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use tracing::{debug, info, warn};

/// Sentinel answer when the explore call fails outright
const SEGMENTS_UNAVAILABLE: &str = "Unable to fetch segments or no segments found.";
/// Sentinel answer when the platform reports an empty result set
const NO_SEGMENTS_FOUND: &str = "No segments found.";

/// Dispatch a `tools/call` to its implementation. `now` is the reference
/// instant for attempt aggregation, injected so tests can pin it.
pub async fn handle_tool_call(
    resources: &ServerResources,
    call: ToolCall,
    now: DateTime<Utc>,
) -> ToolResponse {
    let args = call.arguments.unwrap_or_else(|| json!({}));
    match call.name.as_str() {
        tools::GET_LATITUDE_AND_LONGITUDE => match require_str(&args, json_fields::ADDRESS) {
            Ok(address) => get_latitude_and_longitude(resources, address).await,
            Err(response) => response,
        },
        tools::DEFINE_RECTANGULAR_AREA => define_rectangular_area(&args),
        tools::GET_NEARBY_SEGMENTS => match parse_bounds(&args) {
            Ok(bounds) => get_nearby_segments(resources, bounds).await,
            Err(response) => response,
        },
        tools::GET_SEGMENT_DETAILS => match require_u64(&args, json_fields::SEGMENT_ID) {
            Ok(segment_id) => get_segment_details(resources, segment_id).await,
            Err(response) => response,
        },
        tools::GET_NUMBER_OF_CLIMB_ATTEMPTS_ON_THE_YEAR => {
            match require_u64(&args, json_fields::SEGMENT_ID) {
                Ok(segment_id) => {
                    get_number_of_climb_attempts_on_the_year(resources, segment_id, now).await
                }
                Err(response) => response,
            }
        }
        unknown => ToolResponse::error(format!("Unknown tool: {unknown}")),
    }
}

/// Geocode an address. The one tool where failure is a real error: there is
/// no degraded answer for "where is this address".
pub async fn get_latitude_and_longitude(
    resources: &ServerResources,
    address: &str,
) -> ToolResponse {
    debug!("Geocoding address: {address}");
    match resources.geocoder.geocode(address).await {
        Ok(coordinates) => ToolResponse::structured(
            format!(
                "Latitude: {}, Longitude: {}",
                coordinates.latitude, coordinates.longitude
            ),
            json!({
                "latitude": coordinates.latitude,
                "longitude": coordinates.longitude,
            }),
        ),
        Err(e) => {
            warn!("Geocoding failed for '{address}': {e}");
            ToolResponse::error(format!(
                "Unable to fetch latitude and longitude for address: {address}"
            ))
        }
    }
}

/// Build a bounding box around a center point. Pure geometry, cannot fail
/// once the arguments parse.
pub fn define_rectangular_area(args: &Value) -> ToolResponse {
    let (latitude, longitude) = match (
        require_f64(args, json_fields::LATITUDE),
        require_f64(args, json_fields::LONGITUDE),
    ) {
        (Ok(lat), Ok(lon)) => (lat, lon),
        (Err(response), _) | (_, Err(response)) => return response,
    };
    let distance_km = args
        .get(json_fields::DISTANCE)
        .and_then(Value::as_f64)
        .unwrap_or(crate::constants::defaults::SEARCH_RADIUS_KM);

    let bbox = BoundingBox::around(
        Coordinates {
            latitude,
            longitude,
        },
        distance_km,
    );
    debug!(
        "Rectangular area ({latitude}, {longitude}) +/- {distance_km} km => {:?}",
        bbox
    );

    ToolResponse::structured(
        format!(
            "Southwest: {}, {}\nNortheast: {}, {}",
            bbox.southwest.latitude,
            bbox.southwest.longitude,
            bbox.northeast.latitude,
            bbox.northeast.longitude
        ),
        json!({
            "southwest_latitude": bbox.southwest.latitude,
            "southwest_longitude": bbox.southwest.longitude,
            "northeast_latitude": bbox.northeast.latitude,
            "northeast_longitude": bbox.northeast.longitude,
        }),
    )
}

/// Segment explore within a bounding box, rendered one segment per block.
pub async fn get_nearby_segments(
    resources: &ServerResources,
    bounds: BoundingBox,
) -> ToolResponse {
    match resources.segment_api.explore_segments(bounds).await {
        Ok(segments) if segments.is_empty() => {
            info!("No segments found in the response");
            ToolResponse::text(NO_SEGMENTS_FOUND)
        }
        Ok(segments) => {
            debug!("Formatted {} segments", segments.len());
            let formatted: Vec<String> = segments.iter().map(format_segment).collect();
            ToolResponse::text(formatted.join("\n---\n"))
        }
        Err(e) => {
            warn!("Segment explore failed: {e}");
            ToolResponse::text(SEGMENTS_UNAVAILABLE)
        }
    }
}

/// Detail/ranking record for a segment.
pub async fn get_segment_details(resources: &ServerResources, segment_id: u64) -> ToolResponse {
    match resources.segment_api.get_segment(segment_id).await {
        Ok(detail) => {
            let text = format!(
                "Id: {} - Name: {} - Distance: {} m - Average Gradient: {}% - Efforts: {} - Athletes: {} - Stars: {}",
                detail.id,
                detail.name,
                detail.distance,
                detail.average_grade,
                detail.effort_count.map_or_else(|| "unknown".to_owned(), |n| n.to_string()),
                detail.athlete_count.map_or_else(|| "unknown".to_owned(), |n| n.to_string()),
                detail.star_count.map_or_else(|| "unknown".to_owned(), |n| n.to_string()),
            );
            match serde_json::to_value(&detail) {
                Ok(value) => ToolResponse::structured(text, value),
                Err(_) => ToolResponse::text(text),
            }
        }
        Err(e) => {
            warn!("Segment detail fetch failed for {segment_id}: {e}");
            ToolResponse::error(format!("Unable to fetch segment {segment_id}"))
        }
    }
}

/// Scrape the current-year leaderboard and count attempts. Fetch or parse
/// failure degrades to zero counts, so the caller always gets a well-formed
/// answer; "no data" is only distinguishable in the logs.
pub async fn get_number_of_climb_attempts_on_the_year(
    resources: &ServerResources,
    segment_id: u64,
    now: DateTime<Utc>,
) -> ToolResponse {
    let counts = match resources.leaderboard.fetch_this_year(segment_id).await {
        Ok(html) => {
            let entries = parse_leaderboard(&html);
            debug!(
                "Parsed {} leaderboard entries for segment {segment_id}",
                entries.len()
            );
            count_attempts(&entries, now, resources.date_match)
        }
        Err(e) => {
            warn!("Leaderboard unavailable for segment {segment_id}: {e}");
            AttemptCounts::zero()
        }
    };

    info!(
        "Segment {segment_id}: {} attempts last month, {} since the start of the year",
        counts.last_month_attempts, counts.year_to_date_attempts
    );

    ToolResponse::structured(
        format!(
            "Number of climb attempts last month: {}\nNumber of climb attempts since the beginning of the year: {}",
            counts.last_month_attempts, counts.year_to_date_attempts
        ),
        json!({
            "last_month_climbs_attempts": counts.last_month_attempts,
            "beginning_of_the_year_climbs_attempts": counts.year_to_date_attempts,
        }),
    )
}

fn parse_bounds(args: &Value) -> Result<BoundingBox, ToolResponse> {
    Ok(BoundingBox {
        southwest: Coordinates {
            latitude: require_f64(args, json_fields::SOUTHWEST_LATITUDE)?,
            longitude: require_f64(args, json_fields::SOUTHWEST_LONGITUDE)?,
        },
        northeast: Coordinates {
            latitude: require_f64(args, json_fields::NORTHEAST_LATITUDE)?,
            longitude: require_f64(args, json_fields::NORTHEAST_LONGITUDE)?,
        },
    })
}

fn require_str<'a>(args: &'a Value, field: &str) -> Result<&'a str, ToolResponse> {
    args.get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| ToolResponse::error(format!("Missing required parameter: {field}")))
}

fn require_f64(args: &Value, field: &str) -> Result<f64, ToolResponse> {
    args.get(field)
        .and_then(Value::as_f64)
        .ok_or_else(|| ToolResponse::error(format!("Missing required parameter: {field}")))
}

fn require_u64(args: &Value, field: &str) -> Result<u64, ToolResponse> {
    args.get(field)
        .and_then(Value::as_u64)
        .ok_or_else(|| ToolResponse::error(format!("Missing required parameter: {field}")))
}
