//! Planner configuration.

use crate::chargemap::SamplingConfig;

/// Configuration parameters for trip planning.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Stations further than this from the route are discarded (km).
    pub max_distance_from_route_km: f64,

    /// Battery capacity used for charging-time estimates (kWh).
    pub battery_size_kwh: f64,

    /// Along-route station sampling parameters.
    pub sampling: SamplingConfig,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_distance_from_route_km: 10.0,
            battery_size_kwh: 75.0,
            sampling: SamplingConfig::default(),
        }
    }
}
