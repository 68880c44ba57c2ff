//! Geographic point type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A point on the Earth's surface in decimal degrees.
///
/// This is the universal coordinate currency of the planner: decoded
/// polylines, station locations, and waypoints are all `GeoPoint`s.
/// It is deliberately a plain value type with no validation beyond what
/// the producing code guarantees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Create a new point.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Render as `"lat,lng"`, the format the directions provider expects
    /// for waypoint parameters.
    pub fn as_waypoint(&self) -> String {
        format!("{},{}", self.lat, self.lng)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}
