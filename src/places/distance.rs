//! Vertex-sampled great-circle proximity.

use crate::models::{Point, Polygon};

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two points in meters (haversine).
pub fn haversine_m(a: Point, b: Point) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_long = (b.long - a.long).to_radians();
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_long / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Minimum great-circle distance from `point` to any vertex of `polygon`.
///
/// Samples vertices only, not edges: a point facing the middle of a long
/// edge reports the distance to the nearest corner, not to the edge itself.
///
/// Returns `f64::INFINITY` for a polygon with no vertices.
pub fn min_vertex_distance_m(point: Point, polygon: &Polygon) -> f64 {
    polygon
        .vertices
        .iter()
        .map(|vertex| haversine_m(point, *vertex))
        .fold(f64::INFINITY, f64::min)
}
