//! Mock station provider for testing without API access.

use std::sync::Mutex;

use crate::domain::{GeoPoint, Station};

use super::StationProvider;
use super::client::StationFilters;
use super::error::ChargeMapError;

/// In-memory [`StationProvider`] serving a scripted sequence of responses.
///
/// Each fetch consumes the next scripted entry: `Some(stations)` succeeds,
/// `None` fails with an API error. Once the script is exhausted, further
/// fetches return an empty list. Calls and their filters are recorded.
pub struct MockStationProvider {
    script: Mutex<std::vec::IntoIter<Option<Vec<Station>>>>,
    /// When set, serves this for every call instead of the script.
    constant: Option<Vec<Station>>,
    calls: Mutex<Vec<(GeoPoint, f64, StationFilters)>>,
}

impl MockStationProvider {
    /// Serve the given responses in order.
    pub fn new(script: Vec<Option<Vec<Station>>>) -> Self {
        Self {
            script: Mutex::new(script.into_iter()),
            constant: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Serve the same station list for every call.
    pub fn always(stations: Vec<Station>) -> Self {
        Self {
            script: Mutex::new(Vec::new().into_iter()),
            constant: Some(stations),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Number of fetches made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Filters from each fetch, in call order.
    pub fn recorded_filters(&self) -> Vec<StationFilters> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, _, f)| f.clone())
            .collect()
    }
}

impl StationProvider for MockStationProvider {
    async fn fetch_stations_near(
        &self,
        point: GeoPoint,
        radius_km: f64,
        filters: &StationFilters,
    ) -> Result<Vec<Station>, ChargeMapError> {
        self.calls
            .lock()
            .unwrap()
            .push((point, radius_km, filters.clone()));

        if let Some(stations) = &self.constant {
            return Ok(stations.clone());
        }

        match self.script.lock().unwrap().next() {
            Some(Some(stations)) => Ok(stations),
            Some(None) => Err(ChargeMapError::Api {
                status: 503,
                message: "scripted failure".to_string(),
            }),
            None => Ok(Vec::new()),
        }
    }
}
