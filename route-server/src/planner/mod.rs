//! Route-augmentation planner.
//!
//! This module implements the core pipeline that answers: "where should I
//! stop to charge on this trip?"
//!
//! Candidate stations are filtered by proximity to the route, scored by a
//! multi-factor heuristic, and a policy-dependent subset becomes charging
//! stops; the route is then recomputed with those stops as waypoints.

mod config;
mod score;
mod select;
mod trip;

pub use config::PlannerConfig;
pub use score::{PREFERRED_NETWORKS, RankedStation, rank_stations, score_station};
pub use select::{
    ChargingStop, RouteType, StopSelection, estimate_charging_cost_pounds,
    estimate_charging_time_minutes, select_stops,
};
pub use trip::{PlanError, TripPlan, TripPlanner};
