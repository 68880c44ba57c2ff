//! Request and response DTOs for the web API.
//!
//! The public JSON surface uses camelCase; domain types stay serde-free and
//! are converted here.

use serde::{Deserialize, Serialize};

use crate::domain::{GeoPoint, RouteGeometry, RouteLeg, Station};
use crate::planner::{ChargingStop, RouteType, TripPlan};

/// Request body for `POST /api/directions`.
#[derive(Debug, Deserialize)]
pub struct DirectionsRequest {
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
    /// Waypoints as `"lat,lng"` strings.
    #[serde(default)]
    pub waypoints: Vec<String>,
}

/// Query parameters for `GET /api/charging-stations`.
#[derive(Debug, Deserialize)]
pub struct StationsQuery {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Search radius in km.
    pub distance: Option<f64>,
    pub maxresults: Option<u32>,
    pub countrycode: Option<String>,
    pub levelid: Option<u32>,
    pub usagetypeid: Option<u32>,
    pub connectiontypeid: Option<u32>,
}

/// Request body for `POST /api/charging-stations-along-route`.
#[derive(Debug, Deserialize)]
pub struct AlongRouteRequest {
    /// Points along the route to sample around.
    #[serde(default)]
    pub points: Vec<GeoPoint>,
    /// Search radius around each sampled point, in km.
    pub distance: Option<f64>,
    pub countrycode: Option<String>,
    pub levelid: Option<u32>,
}

/// Query parameters for `GET /api/geocode`.
#[derive(Debug, Deserialize)]
pub struct GeocodeQuery {
    pub address: Option<String>,
}

/// Request body for `POST /api/trip-plan`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPlanRequest {
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub route_type: RouteType,
}

/// JSON rendering of a route.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDto {
    pub distance_meters: i64,
    pub duration_seconds: i64,
    pub distance_text: String,
    pub duration_text: String,
    pub polyline: String,
    pub coordinates: Vec<GeoPoint>,
    pub legs: Vec<RouteLegDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<BoundsDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteLegDto {
    pub distance_meters: i64,
    pub duration_seconds: i64,
    pub distance_text: String,
    pub duration_text: String,
    pub start_address: String,
    pub end_address: String,
}

#[derive(Debug, Serialize)]
pub struct BoundsDto {
    pub northeast: GeoPoint,
    pub southwest: GeoPoint,
}

impl RouteDto {
    pub fn from_route(route: &RouteGeometry) -> Self {
        Self {
            distance_meters: route.distance_meters,
            duration_seconds: route.duration_seconds,
            distance_text: route.distance_text.clone(),
            duration_text: route.duration_text.clone(),
            polyline: route.polyline.clone(),
            coordinates: route.coordinates.clone(),
            legs: route.legs.iter().map(RouteLegDto::from_leg).collect(),
            bounds: route.bounds.map(|b| BoundsDto {
                northeast: b.northeast,
                southwest: b.southwest,
            }),
        }
    }
}

impl RouteLegDto {
    fn from_leg(leg: &RouteLeg) -> Self {
        Self {
            distance_meters: leg.distance_meters,
            duration_seconds: leg.duration_seconds,
            distance_text: leg.distance_text.clone(),
            duration_text: leg.duration_text.clone(),
            start_address: leg.start_address.clone(),
            end_address: leg.end_address.clone(),
        }
    }
}

/// JSON rendering of a station.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationDto {
    pub id: i64,
    pub location: GeoPoint,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub max_power_kw: f64,
    pub connection_count: usize,
}

impl StationDto {
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id,
            location: station.location,
            title: station.title.clone(),
            operator: station.operator.clone(),
            status: station.status.clone(),
            max_power_kw: station.max_power_kw(),
            connection_count: station.connections.len(),
        }
    }
}

/// Station list response.
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    pub count: usize,
    pub stations: Vec<StationDto>,
}

/// JSON rendering of a charging stop.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargingStopDto {
    #[serde(flatten)]
    pub station: StationDto,
    pub distance_from_route_km: f64,
    pub score: f64,
    pub charging_time_minutes: i64,
    pub charging_cost: String,
}

impl ChargingStopDto {
    pub fn from_stop(stop: &ChargingStop) -> Self {
        Self {
            station: StationDto::from_station(&stop.station.station),
            distance_from_route_km: stop.station.distance_from_route_km,
            score: stop.station.score,
            charging_time_minutes: stop.charging_time_minutes,
            charging_cost: stop.charging_cost.clone(),
        }
    }
}

/// JSON rendering of a full trip plan.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPlanResponse {
    pub route: RouteDto,
    pub charging_stations: Vec<ChargingStopDto>,
    pub total_charging_time_minutes: i64,
    pub total_charging_cost: String,
    pub total_trip_seconds: i64,
    pub route_type: RouteType,
}

impl TripPlanResponse {
    pub fn from_plan(plan: &TripPlan) -> Self {
        Self {
            route: RouteDto::from_route(&plan.route),
            charging_stations: plan
                .charging_stations
                .iter()
                .map(ChargingStopDto::from_stop)
                .collect(),
            total_charging_time_minutes: plan.total_charging_time_minutes,
            total_charging_cost: plan.total_charging_cost.clone(),
            total_trip_seconds: plan.total_trip_seconds,
            route_type: plan.route_type,
        }
    }
}

/// Geocode pass-through response.
#[derive(Debug, Serialize)]
pub struct GeocodeResponse {
    pub results: Vec<serde_json::Value>,
}

/// Error body returned by every failing endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Connection;
    use crate::planner::RankedStation;

    #[test]
    fn station_dto_carries_derived_power() {
        let station = Station {
            id: 42,
            location: GeoPoint::new(51.0, -1.0),
            title: "Hub".to_string(),
            operator: Some("Gridserve".to_string()),
            status: Some("Operational".to_string()),
            connections: vec![Connection {
                power_kw: Some(350.0),
                ..Default::default()
            }],
        };

        let dto = StationDto::from_station(&station);
        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json["maxPowerKw"], 350.0);
        assert_eq!(json["connectionCount"], 1);
        assert_eq!(json["id"], 42);
    }

    #[test]
    fn charging_stop_dto_flattens_station_fields() {
        let stop = ChargingStop {
            station: RankedStation {
                station: Station {
                    id: 7,
                    location: GeoPoint::new(51.0, -1.0),
                    title: "Services".to_string(),
                    operator: None,
                    status: Some("Operational".to_string()),
                    connections: vec![],
                },
                distance_from_route_km: 1.5,
                score: 120.0,
            },
            charging_time_minutes: 20,
            charging_cost: "39.50".to_string(),
            max_power_kw: 150.0,
        };

        let json = serde_json::to_value(ChargingStopDto::from_stop(&stop)).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["chargingTimeMinutes"], 20);
        assert_eq!(json["chargingCost"], "39.50");
        assert_eq!(json["distanceFromRouteKm"], 1.5);
    }

    #[test]
    fn trip_plan_request_defaults_route_type() {
        let req: TripPlanRequest =
            serde_json::from_str(r#"{"origin": "A", "destination": "B"}"#).unwrap();
        assert_eq!(req.route_type, RouteType::Balanced);
    }
}
