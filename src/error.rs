//! Error taxonomy for the place-resolution engine.
//!
//! Only coordinate validation is fatal. Malformed catalog records are never
//! errors: they are dropped per-record and reported through
//! [`CatalogWarning`](crate::models::CatalogWarning).

use thiserror::Error;

/// Fatal errors surfaced to the caller.
#[derive(Debug, Error)]
pub enum PlaceError {
    /// Latitude/longitude missing, non-numeric, or outside the valid
    /// geodetic range.
    #[error("invalid coordinate {name}: {value:?}")]
    InvalidCoordinate { name: &'static str, value: String },
}

/// Why a catalog record was dropped by the geometry loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DropReason {
    #[error("geometry is missing")]
    MissingGeometry,

    #[error("geometry type is not \"Polygon\"")]
    NotAPolygon,

    #[error("geometry has no rings")]
    EmptyCoordinates,

    #[error("outer ring contains a position with fewer than two ordinates")]
    MalformedPosition,

    #[error("outer ring is open or has fewer than four positions")]
    OpenRing,
}
