//! Conversion from directions wire types to domain types.

use crate::domain::{self, GeoPoint, LatLngBounds, RouteGeometry, RouteLeg};

use super::error::DirectionsError;
use super::types::{DirectionsResponse, WireRoute};

/// Convert a full directions response into a [`RouteGeometry`].
///
/// Takes the first route alternative. A non-"OK" status or an empty route
/// list is `NoRoute`; the overview polyline is decoded eagerly so the
/// resulting geometry always carries coordinates.
pub fn convert_response(response: &DirectionsResponse) -> Result<RouteGeometry, DirectionsError> {
    if response.status != "OK" {
        return Err(DirectionsError::NoRoute {
            status: response.status.clone(),
            message: response.error_message.clone(),
        });
    }

    let route = response.routes.first().ok_or_else(|| DirectionsError::NoRoute {
        status: "OK".to_string(),
        message: Some("response contained no routes".to_string()),
    })?;

    convert_route(route)
}

/// Convert one wire route into a [`RouteGeometry`].
///
/// The headline distance and duration come from the first leg, mirroring
/// the upstream API's summary behaviour; per-leg values are preserved in
/// `legs` for multi-waypoint routes.
pub fn convert_route(route: &WireRoute) -> Result<RouteGeometry, DirectionsError> {
    let first_leg = route.legs.first().ok_or_else(|| DirectionsError::NoRoute {
        status: "OK".to_string(),
        message: Some("route contained no legs".to_string()),
    })?;

    let coordinates = domain::decode(&route.overview_polyline.points)?;

    let legs = route
        .legs
        .iter()
        .map(|leg| RouteLeg {
            distance_meters: leg.distance.value,
            duration_seconds: leg.duration.value,
            distance_text: leg.distance.text.clone(),
            duration_text: leg.duration.text.clone(),
            start_address: leg.start_address.clone(),
            end_address: leg.end_address.clone(),
        })
        .collect();

    let bounds = route.bounds.as_ref().map(|b| LatLngBounds {
        northeast: GeoPoint::new(b.northeast.lat, b.northeast.lng),
        southwest: GeoPoint::new(b.southwest.lat, b.southwest.lng),
    });

    Ok(RouteGeometry {
        distance_meters: first_leg.distance.value,
        duration_seconds: first_leg.duration.value,
        distance_text: first_leg.distance.text.clone(),
        duration_text: first_leg.duration.text.clone(),
        polyline: route.overview_polyline.points.clone(),
        coordinates,
        legs,
        bounds,
    })
}
