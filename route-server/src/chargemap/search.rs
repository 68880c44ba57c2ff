//! Along-route station search.
//!
//! Samples points along a route's coordinates and looks up stations near
//! each one, deduplicating across points by station identity. Lookups are
//! deliberately sequential with a fixed inter-call delay to stay inside the
//! provider's rate limits; a failed point is logged and contributes nothing.

use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::{GeoPoint, Station};

use super::StationProvider;
use super::client::StationFilters;

/// Parameters for the along-route sampling search.
#[derive(Debug, Clone)]
pub struct SamplingConfig {
    /// Search radius around each sampled point, in km.
    pub radius_km: f64,
    /// Result cap per sampled point.
    pub max_results_per_point: u32,
    /// Roughly how many points to sample along the route.
    pub target_samples: usize,
    /// Delay between consecutive lookups, in milliseconds.
    pub delay_ms: u64,
    /// Provider-side filters applied at every point.
    pub filters: StationFilters,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            radius_km: 5.0,
            max_results_per_point: 20,
            target_samples: 10,
            delay_ms: 100,
            filters: StationFilters::default(),
        }
    }
}

/// Find charging stations along a route by multi-point sampling.
///
/// Every `len / target_samples`-th coordinate is queried (minimum stride 1).
/// Duplicate stations across points keep their first-seen position in the
/// output but take the most recently fetched value (last write wins).
///
/// The accumulator is local to this call: nothing is shared across requests.
pub async fn stations_along_route<S: StationProvider>(
    provider: &S,
    coordinates: &[GeoPoint],
    config: &SamplingConfig,
) -> Vec<Station> {
    if coordinates.is_empty() {
        return Vec::new();
    }

    let stride = (coordinates.len() / config.target_samples).max(1);
    let sampled: Vec<GeoPoint> = coordinates.iter().copied().step_by(stride).collect();

    debug!(
        points = sampled.len(),
        stride,
        radius_km = config.radius_km,
        "sampling stations along route"
    );

    let mut filters = config.filters.clone();
    filters.max_results = config.max_results_per_point;

    let mut order: Vec<Station> = Vec::new();
    let mut seen: HashMap<i64, usize> = HashMap::new();

    for (i, point) in sampled.iter().enumerate() {
        match provider
            .fetch_stations_near(*point, config.radius_km, &filters)
            .await
        {
            Ok(stations) => {
                for station in stations {
                    match seen.get(&station.id) {
                        Some(&idx) => order[idx] = station,
                        None => {
                            seen.insert(station.id, order.len());
                            order.push(station);
                        }
                    }
                }
            }
            Err(e) => {
                // Non-fatal: this point simply contributes no stations.
                warn!(point = %point, error = %e, "station lookup failed for sampled point");
            }
        }

        if i + 1 < sampled.len() && config.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(config.delay_ms)).await;
        }
    }

    debug!(unique = order.len(), "along-route search complete");
    order
}
