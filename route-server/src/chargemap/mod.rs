//! Charging-station provider client (Open Charge Map).
//!
//! Provides point-radius station lookup and the along-route sampling search,
//! plus the [`StationProvider`] seam the planner depends on.

use std::future::Future;

use crate::domain::{GeoPoint, Station};

mod client;
mod error;
mod mock;
mod search;
mod types;

pub use client::{ChargeMapClient, ChargeMapConfig, StationFilters};
pub use error::ChargeMapError;
pub use mock::MockStationProvider;
pub use search::{SamplingConfig, stations_along_route};
pub use types::{WireAddressInfo, WireConnection, WireOperatorInfo, WirePoi, WireStatusType};

/// Source of charging stations near a point.
///
/// This abstraction lets the sampling search and the planner be tested
/// without network access.
pub trait StationProvider {
    /// Fetch stations within `radius_km` of `point`.
    fn fetch_stations_near(
        &self,
        point: GeoPoint,
        radius_km: f64,
        filters: &StationFilters,
    ) -> impl Future<Output = Result<Vec<Station>, ChargeMapError>> + Send;
}
