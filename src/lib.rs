//! Narra - place resolution for incident reporting.
//!
//! Given a reported latitude/longitude, this library determines which
//! administrative and building polygons contain the point and ranks nearby
//! polygons within two proximity bands, for display and for
//! incident-notification targeting.
//!
//! The engine is purely computational: the polygon catalog is supplied by the
//! caller, classification is deterministic, and no state is kept between
//! calls.

pub mod error;
pub mod models;
pub mod places;

pub use error::{DropReason, PlaceError};
pub use models::{
    CatalogWarning, Geometry, PlaceRef, PlaceResolution, Places, Point, Polygon, PolygonRecord,
};
pub use places::{resolve, resolve_point};
