//! Domain types for the trip planner.
//!
//! This module contains the value types and pure functions at the heart of
//! route augmentation: geographic points, the encoded-polyline codec,
//! great-circle proximity maths, and the charging-station model. Nothing in
//! here does I/O.

mod distance;
mod point;
mod polyline;
mod route;
mod station;

pub use distance::{EARTH_RADIUS_KM, haversine_km, min_distance_to_polyline};
pub use point::GeoPoint;
pub use polyline::{PolylineError, decode, encode};
pub use route::{LatLngBounds, RouteGeometry, RouteLeg};
pub use station::{Connection, Station};
