//! Distance banding and display ordering.

use crate::models::{PlaceRef, Places, Point, Polygon};

use super::{contains, min_vertex_distance_m};

/// Display precedence for polygon types; unrecognized types sort after all
/// recognized ones.
pub const POL_TYPE_ORDER: [&str; 5] = ["bldg", "lot", "road", "bar", "mun"];

/// Polygons closer than this are treated as effectively "current", not
/// nearby.
const NEARBY_MIN_M: f64 = 10.0;
const NEARBY_200_MAX_M: f64 = 199.0;
const NEARBY_500_MIN_M: f64 = 200.0;
const NEARBY_500_MAX_M: f64 = 500.0;

/// Bucket polygons into the containment set and the two proximity bands.
///
/// Each set is independently sorted by type precedence; the sort is stable,
/// so polygons of equal precedence keep their catalog order. Distances in
/// `(199, 200]` meters fall into neither band.
pub fn classify(point: Point, polygons: &[Polygon]) -> Places {
    let current: Vec<&Polygon> = polygons
        .iter()
        .filter(|polygon| contains(point, polygon))
        .collect();

    let nearby200: Vec<&Polygon> = polygons
        .iter()
        .filter(|polygon| {
            band_eligible(polygon) && {
                let d = min_vertex_distance_m(point, polygon);
                d > NEARBY_MIN_M && d <= NEARBY_200_MAX_M
            }
        })
        .collect();

    let nearby500: Vec<&Polygon> = polygons
        .iter()
        .filter(|polygon| {
            band_eligible(polygon) && {
                let d = min_vertex_distance_m(point, polygon);
                d > NEARBY_500_MIN_M && d <= NEARBY_500_MAX_M
            }
        })
        .collect();

    Places {
        current: to_refs_sorted(current),
        nearby200: to_refs_sorted(nearby200),
        nearby500: to_refs_sorted(nearby500),
    }
}

/// Only buildings and lots qualify for the nearby bands. The comparison is
/// exact, unlike the case-insensitive precedence sort.
fn band_eligible(polygon: &Polygon) -> bool {
    polygon.pol_type == "bldg" || polygon.pol_type == "lot"
}

fn pol_type_rank(pol_type: &str) -> usize {
    POL_TYPE_ORDER
        .iter()
        .position(|known| known.eq_ignore_ascii_case(pol_type))
        .unwrap_or(POL_TYPE_ORDER.len())
}

fn to_refs_sorted(mut matched: Vec<&Polygon>) -> Vec<PlaceRef> {
    matched.sort_by_key(|polygon| pol_type_rank(&polygon.pol_type));
    matched
        .into_iter()
        .map(|polygon| PlaceRef {
            pol_type: polygon.pol_type.clone(),
            name: polygon.name.clone(),
        })
        .collect()
}
