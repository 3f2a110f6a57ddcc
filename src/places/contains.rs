//! Even-odd ray-casting containment test.

use crate::models::{Point, Polygon};

/// Guards the slope division when an edge is horizontal in longitude.
///
/// The shift this introduces means points exactly on a polygon edge are
/// classified by whichever side the perturbed ray lands on; boundary
/// behavior is whatever the ray cast yields.
const EPS: f64 = 1e-7;

/// Even-odd ray-casting point-in-polygon test over the closed vertex ring.
///
/// Iterates edges `(vertices[i], vertices[j])` with `j` the previous index,
/// wrapping around. With `x = lat` and `y = long`, the crossing test toggles
/// the inside flag once per edge the ray crosses.
pub fn contains(point: Point, polygon: &Polygon) -> bool {
    let vertices = &polygon.vertices;
    if vertices.is_empty() {
        return false;
    }

    let mut inside = false;
    let mut j = vertices.len() - 1;

    for i in 0..vertices.len() {
        let (xi, yi) = (vertices[i].lat, vertices[i].long);
        let (xj, yj) = (vertices[j].lat, vertices[j].long);

        let crosses = (yi > point.long) != (yj > point.long)
            && point.lat < (xj - xi) * (point.long - yi) / (yj - yi + EPS) + xi;
        if crosses {
            inside = !inside;
        }
        j = i;
    }

    inside
}
