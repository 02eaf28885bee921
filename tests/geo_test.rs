// ABOUTME: Integration tests for bounding-box geometry
// ABOUTME: Covers per-degree distances, box construction, and the bounds wire format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use strava_mcp_server::geo::{km_per_degree_latitude, km_per_degree_longitude};
use strava_mcp_server::models::{BoundingBox, Coordinates};

#[test]
fn latitude_degree_distance_is_constant() {
    let expected = 110.574;
    assert!((km_per_degree_latitude() - expected).abs() < f64::EPSILON);
}

#[test]
fn longitude_degree_distance_at_equator() {
    // 40075.017 / 360
    let expected = 111.319_491_666_666_66;
    assert!((km_per_degree_longitude(0.0) - expected).abs() < 1e-9);
}

#[test]
fn bounding_box_is_symmetric_around_center() {
    let center = Coordinates {
        latitude: 45.5,
        longitude: 6.2,
    };
    let bbox = BoundingBox::around(center, 10.0);

    let lat_span_south = center.latitude - bbox.southwest.latitude;
    let lat_span_north = bbox.northeast.latitude - center.latitude;
    assert!((lat_span_south - lat_span_north).abs() < 1e-12);

    let lon_span_west = center.longitude - bbox.southwest.longitude;
    let lon_span_east = bbox.northeast.longitude - center.longitude;
    assert!((lon_span_west - lon_span_east).abs() < 1e-12);

    // 10 km of latitude is 10/110.574 degrees.
    assert!((lat_span_south - 10.0 / 110.574).abs() < 1e-12);
}

#[test]
fn zero_radius_produces_degenerate_box() {
    let center = Coordinates {
        latitude: 45.5,
        longitude: 6.2,
    };
    let bbox = BoundingBox::around(center, 0.0);
    assert_eq!(bbox.southwest, bbox.northeast);
}

#[test]
fn bounds_param_orders_corners_for_the_explore_endpoint() {
    let bbox = BoundingBox {
        southwest: Coordinates {
            latitude: 45.0,
            longitude: 6.0,
        },
        northeast: Coordinates {
            latitude: 45.2,
            longitude: 6.3,
        },
    };
    assert_eq!(bbox.to_bounds_param(), "45,6,45.2,6.3");
}
