//! Charging-station model.

use crate::domain::GeoPoint;

/// One physical charging connection (a plug) at a station.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Connection {
    /// Rated power in kilowatts, when the data source reports it.
    pub power_kw: Option<f64>,
    /// Current rating in amps.
    pub amps: Option<f64>,
    /// Voltage rating.
    pub voltage: Option<f64>,
}

impl Connection {
    /// Effective power of this connection in kW.
    ///
    /// Prefers the reported `power_kw`; a missing or zero rating falls back
    /// to `amps * voltage / 1000` when both are present, else 0.
    pub fn effective_power_kw(&self) -> f64 {
        if let Some(p) = self.power_kw {
            if p != 0.0 {
                return p;
            }
        }
        match (self.amps, self.voltage) {
            (Some(amps), Some(voltage)) => amps * voltage / 1000.0,
            _ => 0.0,
        }
    }
}

/// A charging location, as reported by the station data source.
///
/// Stations are read-only inputs: the planner never rewrites identity
/// fields, it only derives distances, scores, and estimates alongside them.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Data-source identity, used for deduplication.
    pub id: i64,
    pub location: GeoPoint,
    /// Human-readable site name, e.g. "Reading Services".
    pub title: String,
    /// Operating network, e.g. "Gridserve".
    pub operator: Option<String>,
    /// Status title, e.g. "Operational". Missing means unknown.
    pub status: Option<String>,
    pub connections: Vec<Connection>,
}

impl Station {
    /// Maximum effective power across all connections, in kW.
    ///
    /// A station with no connections reports 0.
    pub fn max_power_kw(&self) -> f64 {
        self.connections
            .iter()
            .map(Connection::effective_power_kw)
            .fold(0.0, f64::max)
    }

    /// Whether the station is reported as operational.
    ///
    /// A missing status counts as non-operational.
    pub fn is_operational(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("operational"))
    }
}
