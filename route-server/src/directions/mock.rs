//! Mock route provider for testing without API access.

use std::sync::Mutex;

use crate::domain::{GeoPoint, RouteGeometry};

use super::RouteProvider;
use super::error::DirectionsError;

/// In-memory [`RouteProvider`] serving canned geometry.
///
/// Serves `base` for waypoint-free requests and `with_waypoints` once
/// waypoints are supplied, recording each call so tests can assert on the
/// exact sequencing of the planner's route fetches.
pub struct MockRouteProvider {
    base: RouteGeometry,
    with_waypoints: Option<RouteGeometry>,
    /// Waypoint lists from each call, in order.
    calls: Mutex<Vec<Vec<GeoPoint>>>,
    /// When set, every fetch fails with `NoRoute`.
    fail: bool,
}

impl MockRouteProvider {
    /// Create a mock that serves `base` for every request.
    pub fn new(base: RouteGeometry) -> Self {
        Self {
            base,
            with_waypoints: None,
            calls: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// Serve a different geometry once waypoints are present.
    pub fn with_rerouted(mut self, rerouted: RouteGeometry) -> Self {
        self.with_waypoints = Some(rerouted);
        self
    }

    /// Make every fetch fail.
    pub fn failing(base: RouteGeometry) -> Self {
        Self {
            fail: true,
            ..Self::new(base)
        }
    }

    /// Waypoint lists seen so far, one entry per fetch.
    pub fn recorded_calls(&self) -> Vec<Vec<GeoPoint>> {
        self.calls.lock().unwrap().clone()
    }
}

impl RouteProvider for MockRouteProvider {
    async fn fetch_route(
        &self,
        _origin: &str,
        _destination: &str,
        waypoints: &[GeoPoint],
    ) -> Result<RouteGeometry, DirectionsError> {
        self.calls.lock().unwrap().push(waypoints.to_vec());

        if self.fail {
            return Err(DirectionsError::NoRoute {
                status: "ZERO_RESULTS".to_string(),
                message: None,
            });
        }

        if !waypoints.is_empty() {
            if let Some(rerouted) = &self.with_waypoints {
                return Ok(rerouted.clone());
            }
        }
        Ok(self.base.clone())
    }
}
