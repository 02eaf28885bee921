// ABOUTME: Tool schema registry advertised over tools/list
// ABOUTME: Builds the JSON schemas for every tool this server exposes
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tool registry

use crate::constants::{json_fields, tools};
use crate::mcp::schema::{JsonSchema, PropertySchema, ToolSchema};
use std::collections::HashMap;

fn number(description: &str) -> PropertySchema {
    PropertySchema {
        property_type: "number".into(),
        description: Some(description.into()),
    }
}

fn integer(description: &str) -> PropertySchema {
    PropertySchema {
        property_type: "integer".into(),
        description: Some(description.into()),
    }
}

fn string(description: &str) -> PropertySchema {
    PropertySchema {
        property_type: "string".into(),
        description: Some(description.into()),
    }
}

fn object_schema(
    properties: Vec<(&str, PropertySchema)>,
    required: Vec<&str>,
) -> JsonSchema {
    JsonSchema {
        schema_type: "object".into(),
        properties: Some(
            properties
                .into_iter()
                .map(|(name, schema)| (name.to_owned(), schema))
                .collect::<HashMap<_, _>>(),
        ),
        required: if required.is_empty() {
            None
        } else {
            Some(required.into_iter().map(str::to_owned).collect())
        },
    }
}

/// All tool schemas this server advertises
#[must_use]
pub fn get_tools() -> Vec<ToolSchema> {
    vec![
        ToolSchema {
            name: tools::GET_LATITUDE_AND_LONGITUDE.into(),
            description: "Get the latitude and longitude of a street address".into(),
            input_schema: object_schema(
                vec![(json_fields::ADDRESS, string("The address to geocode"))],
                vec![json_fields::ADDRESS],
            ),
        },
        ToolSchema {
            name: tools::DEFINE_RECTANGULAR_AREA.into(),
            description:
                "Define a rectangular search area around a coordinate, extending a given \
                 distance in kilometers toward each corner"
                    .into(),
            input_schema: object_schema(
                vec![
                    (json_fields::LATITUDE, number("Latitude of the center")),
                    (json_fields::LONGITUDE, number("Longitude of the center")),
                    (
                        json_fields::DISTANCE,
                        number("Distance in kilometers from the center to the corners (default 10)"),
                    ),
                ],
                vec![json_fields::LATITUDE, json_fields::LONGITUDE],
            ),
        },
        ToolSchema {
            name: tools::GET_NEARBY_SEGMENTS.into(),
            description: "Find Strava segments within a bounding box".into(),
            input_schema: object_schema(
                vec![
                    (
                        json_fields::SOUTHWEST_LATITUDE,
                        number("Latitude of the southwest corner"),
                    ),
                    (
                        json_fields::SOUTHWEST_LONGITUDE,
                        number("Longitude of the southwest corner"),
                    ),
                    (
                        json_fields::NORTHEAST_LATITUDE,
                        number("Latitude of the northeast corner"),
                    ),
                    (
                        json_fields::NORTHEAST_LONGITUDE,
                        number("Longitude of the northeast corner"),
                    ),
                ],
                vec![
                    json_fields::SOUTHWEST_LATITUDE,
                    json_fields::SOUTHWEST_LONGITUDE,
                    json_fields::NORTHEAST_LATITUDE,
                    json_fields::NORTHEAST_LONGITUDE,
                ],
            ),
        },
        ToolSchema {
            name: tools::GET_SEGMENT_DETAILS.into(),
            description:
                "Get the detail and ranking record for a segment: distance, gradients, effort \
                 and athlete counts"
                    .into(),
            input_schema: object_schema(
                vec![(json_fields::SEGMENT_ID, integer("The ID of the segment"))],
                vec![json_fields::SEGMENT_ID],
            ),
        },
        ToolSchema {
            name: tools::GET_NUMBER_OF_CLIMB_ATTEMPTS_ON_THE_YEAR.into(),
            description:
                "Count climb attempts on a segment: attempts in the current month and attempts \
                 since the start of the year, from the segment's current-year leaderboard"
                    .into(),
            input_schema: object_schema(
                vec![(json_fields::SEGMENT_ID, integer("The ID of the segment"))],
                vec![json_fields::SEGMENT_ID],
            ),
        },
    ]
}
