//! Application state for the web layer.

use std::sync::Arc;

use crate::chargemap::ChargeMapClient;
use crate::directions::DirectionsClient;
use crate::planner::PlannerConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Directions provider client
    pub directions: Arc<DirectionsClient>,

    /// Charging-station provider client
    pub chargemap: Arc<ChargeMapClient>,

    /// Trip planner configuration
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        directions: DirectionsClient,
        chargemap: ChargeMapClient,
        config: PlannerConfig,
    ) -> Self {
        Self {
            directions: Arc::new(directions),
            chargemap: Arc::new(chargemap),
            config: Arc::new(config),
        }
    }
}
