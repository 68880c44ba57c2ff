//! Charging-stop selection and time/cost estimation.

use serde::{Deserialize, Serialize};

use super::score::RankedStation;

/// Routing policy controlling stop selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteType {
    /// Prefer slower, cheaper chargers; up to 3 stops.
    Cheapest,
    /// Rapid and ultra-rapid only; up to 2 stops.
    Fastest,
    /// No power filter; up to 2 stops. Unknown policies fall back here.
    #[default]
    #[serde(other)]
    Balanced,
}

impl RouteType {
    /// Policy name as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteType::Cheapest => "cheapest",
            RouteType::Fastest => "fastest",
            RouteType::Balanced => "balanced",
        }
    }
}

/// A selected charging stop with its estimates.
#[derive(Debug, Clone, PartialEq)]
pub struct ChargingStop {
    pub station: RankedStation,
    /// Estimated charging time, rounded to whole minutes.
    pub charging_time_minutes: i64,
    /// Estimated cost in pounds, two decimal places.
    pub charging_cost: String,
    pub max_power_kw: f64,
}

/// Selected stops plus unrounded aggregates.
///
/// Totals accumulate the raw per-stop estimates so that rounding happens
/// once, at presentation time, not per stop.
#[derive(Debug, Clone, PartialEq)]
pub struct StopSelection {
    pub stops: Vec<ChargingStop>,
    pub total_charging_minutes: f64,
    pub total_cost_pounds: f64,
}

impl StopSelection {
    /// Total charging time rounded to whole minutes.
    pub fn total_minutes_rounded(&self) -> i64 {
        self.total_charging_minutes.round() as i64
    }

    /// Total cost formatted to two decimal places.
    pub fn total_cost_formatted(&self) -> String {
        format!("{:.2}", self.total_cost_pounds)
    }
}

/// Estimated charging time in minutes for a 20%→80% top-up.
///
/// Models charging 60% of the battery at 90% efficiency.
pub fn estimate_charging_time_minutes(power_kw: f64, battery_size_kwh: f64) -> f64 {
    let charge_needed_kwh = battery_size_kwh * 0.6;
    let charging_efficiency = 0.9;

    let hours = charge_needed_kwh / (power_kw * charging_efficiency);
    hours * 60.0
}

/// Estimated charging cost in pounds.
///
/// Uses a tiered UK-average rate in pence per kWh: ultra-rapid 79, rapid 67,
/// fast 45, slow 30.
pub fn estimate_charging_cost_pounds(power_kw: f64, charging_time_minutes: f64) -> f64 {
    let pence_per_kwh = if power_kw >= 150.0 {
        79.0
    } else if power_kw >= 50.0 {
        67.0
    } else if power_kw >= 22.0 {
        45.0
    } else {
        30.0
    };

    let energy_used_kwh = power_kw * charging_time_minutes / 60.0;
    energy_used_kwh * pence_per_kwh / 100.0
}

/// Select charging stops from ranked candidates per the routing policy.
///
/// Applies the policy's power filter, caps the stop count, and estimates
/// time and cost per stop. Rank order is preserved; the function is pure,
/// so applying it twice to the same input yields the same output.
pub fn select_stops(
    ranked: &[RankedStation],
    route_type: RouteType,
    battery_size_kwh: f64,
) -> StopSelection {
    let (filter, max_stops): (fn(f64) -> bool, usize) = match route_type {
        RouteType::Cheapest => (|power| power < 150.0, 3),
        RouteType::Fastest => (|power| power >= 50.0, 2),
        RouteType::Balanced => (|_| true, 2),
    };

    let mut stops = Vec::new();
    let mut total_charging_minutes = 0.0;
    let mut total_cost_pounds = 0.0;

    for candidate in ranked {
        if stops.len() == max_stops {
            break;
        }

        let max_power_kw = candidate.station.max_power_kw();
        if !filter(max_power_kw) {
            continue;
        }

        let minutes = estimate_charging_time_minutes(max_power_kw, battery_size_kwh);
        let cost = estimate_charging_cost_pounds(max_power_kw, minutes);

        total_charging_minutes += minutes;
        total_cost_pounds += cost;

        stops.push(ChargingStop {
            station: candidate.clone(),
            charging_time_minutes: minutes.round() as i64,
            charging_cost: format!("{cost:.2}"),
            max_power_kw,
        });
    }

    StopSelection {
        stops,
        total_charging_minutes,
        total_cost_pounds,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{Connection, GeoPoint, Station};
    use proptest::prelude::*;

    fn arb_ranked() -> impl Strategy<Value = Vec<RankedStation>> {
        prop::collection::vec((any::<i64>(), 1.0f64..400.0, 0.0f64..200.0), 0..20).prop_map(
            |entries| {
                entries
                    .into_iter()
                    .map(|(id, power, score)| RankedStation {
                        station: Station {
                            id,
                            location: GeoPoint::new(51.0, -1.0),
                            title: String::new(),
                            operator: None,
                            status: Some("Operational".to_string()),
                            connections: vec![Connection {
                                power_kw: Some(power),
                                ..Default::default()
                            }],
                        },
                        distance_from_route_km: 0.0,
                        score,
                    })
                    .collect()
            },
        )
    }

    proptest! {
        /// Policy filters hold for every selected stop.
        #[test]
        fn policy_filters_hold(ranked in arb_ranked()) {
            let cheapest = select_stops(&ranked, RouteType::Cheapest, 75.0);
            prop_assert!(cheapest.stops.len() <= 3);
            for stop in &cheapest.stops {
                prop_assert!(stop.max_power_kw < 150.0);
            }

            let fastest = select_stops(&ranked, RouteType::Fastest, 75.0);
            prop_assert!(fastest.stops.len() <= 2);
            for stop in &fastest.stops {
                prop_assert!(stop.max_power_kw >= 50.0);
            }

            let balanced = select_stops(&ranked, RouteType::Balanced, 75.0);
            prop_assert!(balanced.stops.len() <= 2);
        }

        /// Selection twice over the same input is identical.
        #[test]
        fn idempotent(ranked in arb_ranked()) {
            let a = select_stops(&ranked, RouteType::Balanced, 75.0);
            let b = select_stops(&ranked, RouteType::Balanced, 75.0);
            prop_assert_eq!(a, b);
        }

        /// Totals equal the sum of raw per-stop estimates.
        #[test]
        fn totals_are_sums(ranked in arb_ranked()) {
            let selection = select_stops(&ranked, RouteType::Balanced, 75.0);

            let minutes: f64 = selection
                .stops
                .iter()
                .map(|s| estimate_charging_time_minutes(s.max_power_kw, 75.0))
                .sum();
            prop_assert!((selection.total_charging_minutes - minutes).abs() < 1e-9);
        }
    }
}
