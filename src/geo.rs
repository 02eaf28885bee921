// ABOUTME: Bounding-box geometry for segment search areas
// ABOUTME: Converts a center point and radius into a southwest/northeast rectangle
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bounding-box geometry
//!
//! The rectangle is built from flat per-degree distances: one degree of
//! latitude is treated as a constant 110.574 km, one degree of longitude
//! shrinks with the cosine of the latitude. Good enough for search rectangles
//! tens of kilometers wide; not a geodesic.

use crate::models::{BoundingBox, Coordinates};
use std::f64::consts::PI;

/// Earth circumference at the equator in kilometers
const EARTH_CIRCUMFERENCE_KM: f64 = 40_075.017;

/// Kilometers spanned by one degree of latitude
#[must_use]
pub fn km_per_degree_latitude() -> f64 {
    110.574
}

/// Kilometers spanned by one degree of longitude at the given latitude
#[must_use]
pub fn km_per_degree_longitude(latitude: f64) -> f64 {
    EARTH_CIRCUMFERENCE_KM * (latitude * PI / 180.0).cos() / 360.0
}

impl BoundingBox {
    /// Build a rectangle centered on `center`, extending `radius_km` in each
    /// cardinal direction. A zero radius yields a degenerate box whose
    /// corners coincide; the explore endpoint treats that as an empty area.
    #[must_use]
    pub fn around(center: Coordinates, radius_km: f64) -> Self {
        let lat_delta = radius_km / km_per_degree_latitude();
        let lon_delta = radius_km / km_per_degree_longitude(center.latitude);

        Self {
            southwest: Coordinates {
                latitude: center.latitude - lat_delta,
                longitude: center.longitude - lon_delta,
            },
            northeast: Coordinates {
                latitude: center.latitude + lat_delta,
                longitude: center.longitude + lon_delta,
            },
        }
    }
}
