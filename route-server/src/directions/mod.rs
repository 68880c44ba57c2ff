//! Directions provider client (Google Directions API).
//!
//! This module provides an HTTP client for the upstream directions service
//! and the [`RouteProvider`] seam the planner depends on.
//!
//! Key characteristics of the upstream API:
//! - Errors are reported in-band via a `status` field alongside HTTP 200
//! - The route geometry arrives as an encoded overview polyline
//! - Waypoints are passed as `lat,lng` pairs joined with `|`

use std::future::Future;

use crate::domain::{GeoPoint, RouteGeometry};

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{DirectionsClient, DirectionsConfig};
pub use convert::{convert_response, convert_route};
pub use error::DirectionsError;
pub use mock::MockRouteProvider;
pub use types::{
    DirectionsResponse, WireBounds, WireLatLng, WireLeg, WirePolyline, WireRoute, WireTextValue,
};

/// Source of driving routes.
///
/// This abstraction lets the planner be tested without network access.
pub trait RouteProvider {
    /// Fetch a route from `origin` to `destination`, visiting `waypoints`
    /// in order.
    fn fetch_route(
        &self,
        origin: &str,
        destination: &str,
        waypoints: &[GeoPoint],
    ) -> impl Future<Output = Result<RouteGeometry, DirectionsError>> + Send;
}
