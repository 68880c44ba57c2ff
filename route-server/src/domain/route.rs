//! Route geometry returned by the directions provider.

use crate::domain::GeoPoint;

/// Bounding box of a route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLngBounds {
    pub northeast: GeoPoint,
    pub southwest: GeoPoint,
}

/// One origin-to-waypoint or waypoint-to-waypoint segment of a route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteLeg {
    pub distance_meters: i64,
    pub duration_seconds: i64,
    pub distance_text: String,
    pub duration_text: String,
    pub start_address: String,
    pub end_address: String,
}

/// A computed driving route.
///
/// `coordinates` is the decoded `polyline` in route-direction order (first
/// point = origin, last = destination) and has at least two points whenever
/// `polyline` is non-empty; the directions converter decodes eagerly so
/// downstream code can rely on it.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteGeometry {
    /// Headline distance in metres (first leg, matching the upstream API's
    /// summary behaviour).
    pub distance_meters: i64,
    /// Headline duration in seconds.
    pub duration_seconds: i64,
    pub distance_text: String,
    pub duration_text: String,
    /// The encoded overview polyline, kept for clients that render it.
    pub polyline: String,
    /// Decoded overview polyline.
    pub coordinates: Vec<GeoPoint>,
    /// One leg per waypoint segment.
    pub legs: Vec<RouteLeg>,
    pub bounds: Option<LatLngBounds>,
}
