//! Route-augmentation orchestrator.
//!
//! Runs the full pipeline for one request: fetch the base route, find
//! candidate stations along it, filter by proximity, score and rank, select
//! stops per policy, and re-fetch the route with the chosen stops as
//! waypoints. One sequential async flow, no retries, no partial results.

use tracing::debug;

use crate::chargemap::{StationProvider, stations_along_route};
use crate::directions::{DirectionsError, RouteProvider};
use crate::domain::{self, GeoPoint, PolylineError, RouteGeometry, Station, min_distance_to_polyline};

use super::config::PlannerConfig;
use super::score::rank_stations;
use super::select::{ChargingStop, RouteType, select_stops};

/// Error from trip planning.
///
/// Either route fetch failing, or a malformed route polyline, fails the
/// whole request; station-lookup failures never reach this type (they are
/// recovered inside the sampling search).
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// A route lookup failed
    #[error(transparent)]
    Route(#[from] DirectionsError),

    /// The base route's polyline could not be decoded
    #[error(transparent)]
    Decode(#[from] PolylineError),
}

/// A fully assembled trip plan.
#[derive(Debug, Clone)]
pub struct TripPlan {
    /// The final route: re-fetched through the charging stops when any were
    /// selected, otherwise the base route.
    pub route: RouteGeometry,
    /// Selected stops, in visiting order.
    pub charging_stations: Vec<ChargingStop>,
    pub total_charging_time_minutes: i64,
    /// Total cost in pounds, two decimal places.
    pub total_charging_cost: String,
    /// Driving time plus charging time.
    pub total_trip_seconds: i64,
    pub route_type: RouteType,
}

/// The route-augmentation planner.
///
/// Generic over its two collaborators so the pipeline can run against mocks
/// in tests. The planner itself is stateless; everything lives for one call.
pub struct TripPlanner<'a, R, S> {
    routes: &'a R,
    stations: &'a S,
    config: &'a PlannerConfig,
}

impl<'a, R, S> TripPlanner<'a, R, S>
where
    R: RouteProvider + Sync,
    S: StationProvider + Sync,
{
    /// Create a planner over the given collaborators.
    pub fn new(routes: &'a R, stations: &'a S, config: &'a PlannerConfig) -> Self {
        Self {
            routes,
            stations,
            config,
        }
    }

    /// Plan a trip, discovering candidate stations along the route.
    pub async fn plan(
        &self,
        origin: &str,
        destination: &str,
        route_type: RouteType,
    ) -> Result<TripPlan, PlanError> {
        let base = self.routes.fetch_route(origin, destination, &[]).await?;
        let coordinates = route_coordinates(&base)?;

        let candidates =
            stations_along_route(self.stations, &coordinates, &self.config.sampling).await;
        debug!(candidates = candidates.len(), "found candidate stations");

        self.augment(origin, destination, route_type, base, coordinates, candidates)
            .await
    }

    /// Plan a trip over an already-fetched candidate corpus.
    ///
    /// Skips the along-route search; otherwise identical to [`plan`].
    ///
    /// [`plan`]: TripPlanner::plan
    pub async fn plan_with_candidates(
        &self,
        origin: &str,
        destination: &str,
        route_type: RouteType,
        candidates: Vec<Station>,
    ) -> Result<TripPlan, PlanError> {
        let base = self.routes.fetch_route(origin, destination, &[]).await?;
        let coordinates = route_coordinates(&base)?;

        self.augment(origin, destination, route_type, base, coordinates, candidates)
            .await
    }

    /// Filter, rank, select, and conditionally re-route.
    async fn augment(
        &self,
        origin: &str,
        destination: &str,
        route_type: RouteType,
        base: RouteGeometry,
        coordinates: Vec<GeoPoint>,
        candidates: Vec<Station>,
    ) -> Result<TripPlan, PlanError> {
        let near_route: Vec<(Station, f64)> = candidates
            .into_iter()
            .filter_map(|station| {
                let distance = min_distance_to_polyline(station.location, &coordinates);
                (distance <= self.config.max_distance_from_route_km).then_some((station, distance))
            })
            .collect();

        let ranked = rank_stations(near_route);
        let selection = select_stops(&ranked, route_type, self.config.battery_size_kwh);

        debug!(
            ranked = ranked.len(),
            selected = selection.stops.len(),
            route_type = route_type.as_str(),
            "selected charging stops"
        );

        // Re-route through the stops, in selection order, to get correct
        // per-leg distances. No stops means the base route is final.
        let route = if selection.stops.is_empty() {
            base
        } else {
            let waypoints: Vec<GeoPoint> = selection
                .stops
                .iter()
                .map(|stop| stop.station.station.location)
                .collect();
            self.routes
                .fetch_route(origin, destination, &waypoints)
                .await?
        };

        let total_charging_time_minutes = selection.total_minutes_rounded();
        let total_trip_seconds =
            route.duration_seconds + (selection.total_charging_minutes * 60.0).round() as i64;

        let total_charging_cost = selection.total_cost_formatted();
        Ok(TripPlan {
            route,
            charging_stations: selection.stops,
            total_charging_time_minutes,
            total_charging_cost,
            total_trip_seconds,
            route_type,
        })
    }
}

/// Coordinates for proximity filtering: the route's own when supplied,
/// otherwise decoded from its polyline.
fn route_coordinates(route: &RouteGeometry) -> Result<Vec<GeoPoint>, PolylineError> {
    if !route.coordinates.is_empty() {
        return Ok(route.coordinates.clone());
    }
    domain::decode(&route.polyline)
}
