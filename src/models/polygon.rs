//! Catalog polygon records and the derived in-memory polygon.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use super::Point;

/// GeoJSON polygon geometry as stored in the catalog.
///
/// Coordinates use `[longitude, latitude]` ordinate order per GeoJSON; the
/// axis order is swapped relative to [`Point`] when the loader derives
/// vertices. Both fields default when absent; partially-formed geometry
/// survives deserialization and is rejected by the loader.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type", default)]
    pub geo_type: String,
    #[serde(default)]
    pub coordinates: Vec<Vec<Vec<f64>>>,
}

/// Raw polygon record as supplied by the catalog owner.
///
/// `geometry` arrives either as a GeoJSON object or as an embedded JSON
/// string; both deserialize. A value that cannot be read as geometry at all
/// degrades to `None`, and the loader later drops the record with a warning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolygonRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "polType", default)]
    pub pol_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_geometry")]
    pub geometry: Option<Geometry>,
}

/// Validated polygon derived from a catalog record: the outer ring only,
/// closed, in lat/long vertex order. Owned by a single resolution call.
#[derive(Debug, Clone)]
pub struct Polygon {
    pub id: String,
    pub name: String,
    pub pol_type: String,
    pub vertices: Vec<Point>,
}

fn lenient_geometry<'de, D>(deserializer: D) -> Result<Option<Geometry>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(raw)) => match serde_json::from_str(&raw) {
            Ok(geometry) => Some(geometry),
            Err(err) => {
                warn!("Discarding unparseable geometry string: {}", err);
                None
            }
        },
        Some(other) => match serde_json::from_value(other) {
            Ok(geometry) => Some(geometry),
            Err(err) => {
                warn!("Discarding malformed geometry value: {}", err);
                None
            }
        },
    })
}
