//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;

use crate::chargemap::{SamplingConfig, stations_along_route};
use crate::domain::GeoPoint;
use crate::planner::{PlanError, TripPlanner};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/directions", post(directions))
        .route("/api/charging-stations", get(charging_stations))
        .route(
            "/api/charging-stations-along-route",
            post(charging_stations_along_route),
        )
        .route("/api/geocode", get(geocode))
        .route("/api/trip-plan", post(trip_plan))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "route-server",
        "endpoints": [
            "/api/directions",
            "/api/charging-stations",
            "/api/charging-stations-along-route",
            "/api/geocode",
            "/api/trip-plan",
        ],
    }))
}

/// Compute a driving route, optionally via waypoints.
async fn directions(
    State(state): State<AppState>,
    Json(req): Json<DirectionsRequest>,
) -> Result<Json<RouteDto>, AppError> {
    if req.origin.is_empty() || req.destination.is_empty() {
        return Err(AppError::BadRequest {
            message: "Missing required parameters: origin and destination".to_string(),
        });
    }

    let waypoints = parse_waypoints(&req.waypoints)?;

    let route = state
        .directions
        .route(&req.origin, &req.destination, &waypoints)
        .await
        .map_err(AppError::from)?;

    Ok(Json(RouteDto::from_route(&route)))
}

/// Look up charging stations around a point.
async fn charging_stations(
    State(state): State<AppState>,
    Query(query): Query<StationsQuery>,
) -> Result<Json<StationListResponse>, AppError> {
    let (Some(latitude), Some(longitude)) = (query.latitude, query.longitude) else {
        return Err(AppError::BadRequest {
            message: "Missing required parameters: latitude and longitude".to_string(),
        });
    };

    let mut filters = state.config.sampling.filters.clone();
    filters.max_results = query.maxresults.unwrap_or(50);
    if let Some(country) = query.countrycode {
        filters.country_code = country;
    }
    filters.level_id = query.levelid.or(filters.level_id);
    filters.usage_type_id = query.usagetypeid.or(filters.usage_type_id);
    filters.connection_type_id = query.connectiontypeid.or(filters.connection_type_id);

    let stations = state
        .chargemap
        .stations_near(
            GeoPoint::new(latitude, longitude),
            query.distance.unwrap_or(10.0),
            &filters,
        )
        .await
        .map_err(AppError::from)?;

    Ok(Json(StationListResponse {
        count: stations.len(),
        stations: stations.iter().map(StationDto::from_station).collect(),
    }))
}

/// Look up charging stations along a route by multi-point sampling.
async fn charging_stations_along_route(
    State(state): State<AppState>,
    Json(req): Json<AlongRouteRequest>,
) -> Result<Json<StationListResponse>, AppError> {
    if req.points.is_empty() {
        return Err(AppError::BadRequest {
            message: "Missing required parameter: points (array of coordinates along route)"
                .to_string(),
        });
    }

    let mut sampling: SamplingConfig = state.config.sampling.clone();
    if let Some(distance) = req.distance {
        sampling.radius_km = distance;
    }
    if let Some(country) = req.countrycode {
        sampling.filters.country_code = country;
    }
    sampling.filters.level_id = req.levelid.or(sampling.filters.level_id);

    let stations = stations_along_route(&*state.chargemap, &req.points, &sampling).await;

    Ok(Json(StationListResponse {
        count: stations.len(),
        stations: stations.iter().map(StationDto::from_station).collect(),
    }))
}

/// Address lookup, passed straight through to the provider.
async fn geocode(
    State(state): State<AppState>,
    Query(query): Query<GeocodeQuery>,
) -> Result<Json<GeocodeResponse>, AppError> {
    let Some(address) = query.address.filter(|a| !a.is_empty()) else {
        return Err(AppError::BadRequest {
            message: "Missing address parameter".to_string(),
        });
    };

    let results = state.directions.geocode(&address).await.map_err(AppError::from)?;

    Ok(Json(GeocodeResponse { results }))
}

/// Plan a trip with charging stops.
async fn trip_plan(
    State(state): State<AppState>,
    Json(req): Json<TripPlanRequest>,
) -> Result<Json<TripPlanResponse>, AppError> {
    if req.origin.is_empty() || req.destination.is_empty() {
        return Err(AppError::BadRequest {
            message: "Missing required parameters: origin and destination".to_string(),
        });
    }

    let planner = TripPlanner::new(&*state.directions, &*state.chargemap, &*state.config);
    let plan = planner
        .plan(&req.origin, &req.destination, req.route_type)
        .await
        .map_err(AppError::from)?;

    Ok(Json(TripPlanResponse::from_plan(&plan)))
}

/// Parse `"lat,lng"` waypoint strings.
fn parse_waypoints(raw: &[String]) -> Result<Vec<GeoPoint>, AppError> {
    raw.iter()
        .map(|s| {
            let (lat, lng) = s.split_once(',').ok_or_else(|| AppError::BadRequest {
                message: format!("Invalid waypoint: {s}"),
            })?;
            let lat = lat.trim().parse().map_err(|_| AppError::BadRequest {
                message: format!("Invalid waypoint latitude: {s}"),
            })?;
            let lng = lng.trim().parse().map_err(|_| AppError::BadRequest {
                message: format!("Invalid waypoint longitude: {s}"),
            })?;
            Ok(GeoPoint::new(lat, lng))
        })
        .collect()
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Upstream { message: String },
    Internal { message: String },
}

impl From<crate::directions::DirectionsError> for AppError {
    fn from(e: crate::directions::DirectionsError) -> Self {
        use crate::directions::DirectionsError;
        match e {
            DirectionsError::MissingInput(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            DirectionsError::NoRoute { .. } => AppError::Upstream {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<crate::chargemap::ChargeMapError> for AppError {
    fn from(e: crate::chargemap::ChargeMapError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::Route(route_err) => AppError::from(route_err),
            PlanError::Decode(decode_err) => AppError::Internal {
                message: decode_err.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::Upstream { message } => (StatusCode::BAD_GATEWAY, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        tracing::error!(%status, "request failed: {message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
