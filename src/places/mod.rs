//! Place-resolution pipeline.
//!
//! Converts a polygon catalog into validated geometry, classifies a query
//! point by containment and proximity, and orders the results for display.

mod contains;
mod distance;
mod loader;
mod rank;
mod service;

pub use contains::contains;
pub use distance::{haversine_m, min_vertex_distance_m, EARTH_RADIUS_M};
pub use loader::load_polygons;
pub use rank::{classify, POL_TYPE_ORDER};
pub use service::{resolve, resolve_point};
