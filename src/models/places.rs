//! Classification output types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DropReason;

/// A matched polygon projected down to its display fields. The catalog id
/// never appears in output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceRef {
    #[serde(rename = "polType")]
    pub pol_type: String,
    pub name: String,
}

/// Classification of a point against the polygon catalog: containing
/// polygons plus two proximity bands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Places {
    pub current: Vec<PlaceRef>,
    pub nearby200: Vec<PlaceRef>,
    pub nearby500: Vec<PlaceRef>,
}

impl Places {
    /// Human-readable caption for an incident report: the names of the
    /// containing polygons, or a fallback when the point is inside none.
    pub fn location_label(&self) -> String {
        if self.current.is_empty() {
            return "unknown location".to_string();
        }
        self.current
            .iter()
            .map(|place| place.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty() && self.nearby200.is_empty() && self.nearby500.is_empty()
    }
}

/// Data-quality warning for a catalog record dropped by the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogWarning {
    pub id: String,
    pub name: String,
    pub reason: DropReason,
}

impl fmt::Display for CatalogWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "skipping polygon \"{}\" (ID: {}): {}",
            self.name, self.id, self.reason
        )
    }
}

/// Result of one resolution call: the classification plus any per-record
/// warnings raised while loading the catalog. Warnings never fail the call.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceResolution {
    pub places: Places,
    pub warnings: Vec<CatalogWarning>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(pol_type: &str, name: &str) -> PlaceRef {
        PlaceRef {
            pol_type: pol_type.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_wire_field_names() {
        let places = Places {
            current: vec![place("bldg", "City Hall")],
            nearby200: vec![],
            nearby500: vec![],
        };

        let json = serde_json::to_value(&places).unwrap();
        assert_eq!(json["current"][0]["polType"], "bldg");
        assert_eq!(json["current"][0]["name"], "City Hall");
        assert!(json["nearby200"].as_array().unwrap().is_empty());
        assert!(json["nearby500"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_location_label_joins_current_names() {
        let places = Places {
            current: vec![place("bldg", "City Hall"), place("mun", "Pikit")],
            nearby200: vec![],
            nearby500: vec![],
        };
        assert_eq!(places.location_label(), "City Hall, Pikit");
    }

    #[test]
    fn test_location_label_fallback() {
        assert_eq!(Places::default().location_label(), "unknown location");
    }
}
