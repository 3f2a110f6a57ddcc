//! Resolution orchestrator: the sole entry point for external callers.

use tracing::debug;

use crate::error::PlaceError;
use crate::models::{PlaceResolution, Point, PolygonRecord};

use super::{classify, load_polygons};

/// Resolve string coordinates against the polygon catalog.
///
/// Validates both coordinates, loads the catalog into polygons (dropping
/// malformed records with warnings), and classifies the point. The engine
/// knows nothing of HTTP, persistence, or notification delivery; the caller
/// fetches the catalog and serializes the result.
pub fn resolve(
    catalog: &[PolygonRecord],
    lat: &str,
    long: &str,
) -> Result<PlaceResolution, PlaceError> {
    let point = Point::parse(lat, long)?;
    Ok(resolve_point(catalog, point))
}

/// Resolve a point that the caller already holds as numbers.
pub fn resolve_point(catalog: &[PolygonRecord], point: Point) -> PlaceResolution {
    let (polygons, warnings) = load_polygons(catalog);
    let places = classify(point, &polygons);

    debug!(
        "Resolved ({}, {}): {} current, {} nearby200, {} nearby500, {} records skipped",
        point.lat,
        point.long,
        places.current.len(),
        places.nearby200.len(),
        places.nearby500.len(),
        warnings.len()
    );

    PlaceResolution { places, warnings }
}
