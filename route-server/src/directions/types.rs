//! Wire types for the Google Directions API.
//!
//! These mirror the JSON the upstream returns; conversion to domain types
//! happens in `convert.rs`.

use serde::Deserialize;

/// Top-level directions response.
#[derive(Debug, Deserialize)]
pub struct DirectionsResponse {
    pub status: String,
    #[serde(default)]
    pub routes: Vec<WireRoute>,
    pub error_message: Option<String>,
}

/// One route alternative.
#[derive(Debug, Deserialize)]
pub struct WireRoute {
    #[serde(default)]
    pub legs: Vec<WireLeg>,
    pub overview_polyline: WirePolyline,
    pub bounds: Option<WireBounds>,
}

/// One leg of a route (between consecutive waypoints).
#[derive(Debug, Deserialize)]
pub struct WireLeg {
    pub distance: WireTextValue,
    pub duration: WireTextValue,
    #[serde(default)]
    pub start_address: String,
    #[serde(default)]
    pub end_address: String,
}

/// A value with its human-readable rendering, e.g. `{"text": "191 km", "value": 190912}`.
#[derive(Debug, Deserialize)]
pub struct WireTextValue {
    pub text: String,
    pub value: i64,
}

/// Encoded overview polyline wrapper.
#[derive(Debug, Deserialize)]
pub struct WirePolyline {
    pub points: String,
}

/// Route bounding box.
#[derive(Debug, Deserialize)]
pub struct WireBounds {
    pub northeast: WireLatLng,
    pub southwest: WireLatLng,
}

/// Wire lat/lng pair.
#[derive(Debug, Deserialize)]
pub struct WireLatLng {
    pub lat: f64,
    pub lng: f64,
}
