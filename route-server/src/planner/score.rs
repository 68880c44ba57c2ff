//! Station scoring and ranking.
//!
//! Assigns each candidate station a suitability score from its attributes
//! and its distance from the route, then ranks candidates best-first.

use crate::domain::Station;

/// Networks that earn a reliability bonus.
///
/// Matched case-insensitively as substrings of the operator name. The
/// thresholds and names here are behavioural constants: changing them
/// changes every score.
pub const PREFERRED_NETWORKS: [&str; 4] = ["gridserve", "ionity", "tesla", "bp pulse"];

/// A station annotated with its distance from the route and its score.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedStation {
    pub station: Station,
    pub distance_from_route_km: f64,
    pub score: f64,
}

/// Score a station's suitability as a charging stop.
///
/// Starts at 100 and applies, in order:
/// - distance penalty: `-(d / 10) * 30`, uncapped beyond 10 km
/// - power bonus: ≥150 kW +30, ≥50 +20, ≥22 +10, else −10
/// - charger-count bonus: `min(count * 2, 10)`, count at least 1
/// - service-area bonus: +15 when the title mentions "services"
/// - operational penalty: −50 unless reported operational
/// - preferred-network bonus: +10 for [`PREFERRED_NETWORKS`]
///
/// Pure and deterministic.
pub fn score_station(station: &Station, distance_from_route_km: f64) -> f64 {
    let mut score = 100.0;

    score -= (distance_from_route_km / 10.0) * 30.0;

    let max_power = station.max_power_kw();
    if max_power >= 150.0 {
        score += 30.0;
    } else if max_power >= 50.0 {
        score += 20.0;
    } else if max_power >= 22.0 {
        score += 10.0;
    } else {
        score -= 10.0;
    }

    let charger_count = station.connections.len().max(1);
    score += (charger_count as f64 * 2.0).min(10.0);

    if station.title.to_lowercase().contains("services") {
        score += 15.0;
    }

    if !station.is_operational() {
        score -= 50.0;
    }

    let operator = station
        .operator
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();
    if PREFERRED_NETWORKS.iter().any(|net| operator.contains(net)) {
        score += 10.0;
    }

    score
}

/// Score and rank stations, best-first.
///
/// The sort is stable, so equally-scored stations keep their input order;
/// combined with the deterministic along-route search this makes ranking
/// reproducible.
pub fn rank_stations(stations: Vec<(Station, f64)>) -> Vec<RankedStation> {
    let mut ranked: Vec<RankedStation> = stations
        .into_iter()
        .map(|(station, distance_from_route_km)| {
            let score = score_station(&station, distance_from_route_km);
            RankedStation {
                station,
                distance_from_route_km,
                score,
            }
        })
        .collect();

    // Vec::sort_by is stable; ties keep input order.
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Connection, GeoPoint};

    fn rapid_connection(power_kw: f64) -> Connection {
        Connection {
            power_kw: Some(power_kw),
            ..Default::default()
        }
    }

    fn station(title: &str, operator: Option<&str>, status: Option<&str>, power: &[f64]) -> Station {
        Station {
            id: 1,
            location: GeoPoint::new(51.5, -0.1),
            title: title.to_string(),
            operator: operator.map(str::to_string),
            status: status.map(str::to_string),
            connections: power.iter().map(|&p| rapid_connection(p)).collect(),
        }
    }

    #[test]
    fn reference_score_for_ideal_station() {
        // On-route, ultra-rapid, operational, 4 chargers, preferred network:
        // 100 - 0 + 30 + 8 + 0 - 0 + 10 = 148
        let s = station(
            "Motorway Charging Hub",
            Some("Ionity"),
            Some("Operational"),
            &[150.0, 150.0, 150.0, 150.0],
        );
        assert_eq!(score_station(&s, 0.0), 148.0);
    }

    #[test]
    fn non_operational_loses_fifty() {
        let s = station(
            "Motorway Charging Hub",
            Some("Ionity"),
            Some("Partly Operational (Mixed)"),
            &[150.0, 150.0, 150.0, 150.0],
        );
        assert_eq!(score_station(&s, 0.0), 98.0);
    }

    #[test]
    fn missing_status_counts_as_non_operational() {
        let s = station("Hub", None, None, &[150.0]);
        let with_status = station("Hub", None, Some("Operational"), &[150.0]);
        assert_eq!(
            score_station(&s, 0.0),
            score_station(&with_status, 0.0) - 50.0
        );
    }

    #[test]
    fn distance_penalty_is_linear() {
        let s = station("Hub", None, Some("Operational"), &[50.0]);

        let at_zero = score_station(&s, 0.0);
        let at_five = score_station(&s, 5.0);
        let at_ten = score_station(&s, 10.0);

        assert_eq!(at_zero - at_five, 15.0);
        assert_eq!(at_zero - at_ten, 30.0);
    }

    #[test]
    fn distance_penalty_uncapped_beyond_ten_km() {
        let s = station("Hub", None, Some("Operational"), &[50.0]);
        assert_eq!(score_station(&s, 0.0) - score_station(&s, 20.0), 60.0);
    }

    #[test]
    fn power_tier_bonuses() {
        let base = |power: &[f64]| score_station(&station("X", None, Some("Operational"), power), 0.0);

        assert_eq!(base(&[150.0]) - base(&[50.0]), 10.0);
        assert_eq!(base(&[50.0]) - base(&[22.0]), 10.0);
        assert_eq!(base(&[22.0]) - base(&[7.0]), 20.0);
    }

    #[test]
    fn slow_charger_is_penalized() {
        let slow = station("X", None, Some("Operational"), &[7.0]);
        let fast = station("X", None, Some("Operational"), &[22.0]);
        // -10 vs +10 around the same base.
        assert_eq!(score_station(&fast, 0.0) - score_station(&slow, 0.0), 20.0);
    }

    #[test]
    fn charger_count_bonus_caps_at_ten() {
        let four = station("X", None, Some("Operational"), &[50.0; 4]);
        let five = station("X", None, Some("Operational"), &[50.0; 5]);
        let eight = station("X", None, Some("Operational"), &[50.0; 8]);

        assert_eq!(score_station(&five, 0.0) - score_station(&four, 0.0), 2.0);
        assert_eq!(score_station(&eight, 0.0), score_station(&five, 0.0));
    }

    #[test]
    fn zero_connections_count_as_one() {
        let none = station("X", None, Some("Operational"), &[]);
        // Base 100 - 10 (no power) + 2 (count of one) - 0 = 92
        assert_eq!(score_station(&none, 0.0), 92.0);
    }

    #[test]
    fn services_bonus_is_case_insensitive() {
        let plain = station("Leigh Delamere", None, Some("Operational"), &[50.0]);
        let services = station("Leigh Delamere SERVICES", None, Some("Operational"), &[50.0]);
        assert_eq!(
            score_station(&services, 0.0) - score_station(&plain, 0.0),
            15.0
        );
    }

    #[test]
    fn preferred_network_matches_substring() {
        let plain = station("X", Some("Acme Charging"), Some("Operational"), &[50.0]);
        let preferred = station("X", Some("BP Pulse (UK)"), Some("Operational"), &[50.0]);
        assert_eq!(
            score_station(&preferred, 0.0) - score_station(&plain, 0.0),
            10.0
        );
    }

    #[test]
    fn ranking_is_descending_and_stable() {
        let a = station("A Services", None, Some("Operational"), &[150.0]);
        let b = station("B", None, Some("Operational"), &[150.0]);
        let c = station("C", None, Some("Operational"), &[150.0]);

        // b and c tie; b came first in the input.
        let ranked = rank_stations(vec![(b.clone(), 0.0), (c.clone(), 0.0), (a.clone(), 0.0)]);

        assert_eq!(ranked[0].station.title, "A Services");
        assert_eq!(ranked[1].station.title, "B");
        assert_eq!(ranked[2].station.title, "C");
    }
}
