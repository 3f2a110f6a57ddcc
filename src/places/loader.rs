//! Geometry loader: raw catalog records to validated polygons.

use tracing::warn;

use crate::error::DropReason;
use crate::models::{CatalogWarning, Point, Polygon, PolygonRecord};

const GEOJSON_POLYGON: &str = "Polygon";

/// Convert raw catalog records into validated polygons.
///
/// Records with missing or malformed geometry are dropped and reported as
/// warnings; loading itself never fails. No winding or self-intersection
/// validation is performed.
pub fn load_polygons(records: &[PolygonRecord]) -> (Vec<Polygon>, Vec<CatalogWarning>) {
    let mut polygons = Vec::with_capacity(records.len());
    let mut warnings = Vec::new();

    for record in records {
        match load_record(record) {
            Ok(polygon) => polygons.push(polygon),
            Err(reason) => {
                let warning = CatalogWarning {
                    id: record.id.clone(),
                    name: record.name.clone(),
                    reason,
                };
                warn!("{}", warning);
                warnings.push(warning);
            }
        }
    }

    (polygons, warnings)
}

fn load_record(record: &PolygonRecord) -> Result<Polygon, DropReason> {
    let geometry = record.geometry.as_ref().ok_or(DropReason::MissingGeometry)?;

    if geometry.geo_type != GEOJSON_POLYGON {
        return Err(DropReason::NotAPolygon);
    }

    // Only the outer ring is used; holes are ignored.
    let outer_ring = geometry
        .coordinates
        .first()
        .ok_or(DropReason::EmptyCoordinates)?;

    // GeoJSON positions are [longitude, latitude]; vertices are lat/long.
    let mut vertices = Vec::with_capacity(outer_ring.len());
    for position in outer_ring {
        if position.len() < 2 {
            return Err(DropReason::MalformedPosition);
        }
        vertices.push(Point {
            lat: position[1],
            long: position[0],
        });
    }

    if vertices.len() < 4 || vertices.first() != vertices.last() {
        return Err(DropReason::OpenRing);
    }

    Ok(Polygon {
        id: record.id.clone(),
        name: record.name.clone(),
        pol_type: record.pol_type.clone().unwrap_or_default(),
        vertices,
    })
}
