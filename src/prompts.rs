// ABOUTME: MCP prompt definitions for guided segment searches
// ABOUTME: Scripts the tool sequence from address or coordinates to nearby segments
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prompt surface
//!
//! Two prompts: a scripted walkthrough from a street address (geocode, build
//! a search area, explore) and a bare coordinate-based search request.

use crate::constants::prompts;
use crate::mcp::schema::{GetPromptResult, PromptArgument, PromptMessage, PromptSchema};
use serde_json::Value;

/// All prompt schemas this server advertises
#[must_use]
pub fn get_prompts() -> Vec<PromptSchema> {
    vec![
        PromptSchema {
            name: prompts::FIND_SEGMENTS_BY_ADDRESS.into(),
            description: Some("Find Strava segments near a street address".into()),
            arguments: Some(vec![PromptArgument {
                name: "address".into(),
                description: Some("The address to search around".into()),
                required: Some(true),
            }]),
        },
        PromptSchema {
            name: prompts::FIND_SEGMENTS_BY_COORDINATES.into(),
            description: Some("Find Strava segments within a bounding box".into()),
            arguments: Some(vec![
                PromptArgument {
                    name: "southwest_lat".into(),
                    description: Some("Southwest corner latitude".into()),
                    required: Some(true),
                },
                PromptArgument {
                    name: "southwest_lon".into(),
                    description: Some("Southwest corner longitude".into()),
                    required: Some(true),
                },
                PromptArgument {
                    name: "northeast_lat".into(),
                    description: Some("Northeast corner latitude".into()),
                    required: Some(true),
                },
                PromptArgument {
                    name: "northeast_lon".into(),
                    description: Some("Northeast corner longitude".into()),
                    required: Some(true),
                },
            ]),
        },
    ]
}

/// Resolve a prompt by name with its arguments; `None` for unknown prompts
#[must_use]
pub fn get_prompt(name: &str, arguments: Option<&Value>) -> Option<GetPromptResult> {
    match name {
        prompts::FIND_SEGMENTS_BY_ADDRESS => Some(find_segments_by_address(arguments)),
        prompts::FIND_SEGMENTS_BY_COORDINATES => Some(find_segments_by_coordinates(arguments)),
        _ => None,
    }
}

fn arg<'a>(arguments: Option<&'a Value>, name: &str) -> &'a str {
    arguments
        .and_then(|args| args.get(name))
        .and_then(Value::as_str)
        .unwrap_or("")
}

fn find_segments_by_address(arguments: Option<&Value>) -> GetPromptResult {
    let address = arg(arguments, "address");
    GetPromptResult {
        description: Some("Find Strava segments near an address".into()),
        messages: vec![
            PromptMessage::text(
                "system",
                "You are a helpful assistant that finds Strava segments near addresses. \
                 You will use the following tools in sequence:\n\
                 1. get_latitude_and_longitude to get coordinates\n\
                 2. define_rectangular_area to create a search area\n\
                 3. get_nearby_segments to find segments",
            ),
            PromptMessage::text(
                "user",
                format!("Find all Strava segments near this address: {address}"),
            ),
            PromptMessage::text(
                "assistant",
                "I'll help you find Strava segments near that address. Let me break this down into steps:\n\
                 1. First, I'll get the coordinates for the address using get_latitude_and_longitude\n\
                 2. Then, I'll define a rectangular area around those coordinates using define_rectangular_area with a 10km radius\n\
                 3. Finally, I'll find all segments in that area using get_nearby_segments\n\n\
                 Let's start by getting the coordinates for the address.",
            ),
            PromptMessage::text("tool", "get_latitude_and_longitude"),
            PromptMessage::text(
                "assistant",
                "Now that we have the coordinates, let's define a search area around them.",
            ),
            PromptMessage::text("tool", "define_rectangular_area"),
            PromptMessage::text("assistant", "Finally, let's find all segments in this area."),
            PromptMessage::text("tool", "get_nearby_segments"),
        ],
    }
}

fn find_segments_by_coordinates(arguments: Option<&Value>) -> GetPromptResult {
    let southwest_lat = arg(arguments, "southwest_lat");
    let southwest_lon = arg(arguments, "southwest_lon");
    let northeast_lat = arg(arguments, "northeast_lat");
    let northeast_lon = arg(arguments, "northeast_lon");
    GetPromptResult {
        description: Some("Find Strava segments within explicit coordinates".into()),
        messages: vec![PromptMessage::text(
            "user",
            format!(
                "Find all Strava segments within these coordinates:\n\
                 Southwest: {southwest_lat}, {southwest_lon}\n\
                 Northeast: {northeast_lat}, {northeast_lon}"
            ),
        )],
    }
}
