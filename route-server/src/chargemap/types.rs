//! Wire types for the Open Charge Map POI API.
//!
//! The compact schema uses PascalCase field names. Conversion to the domain
//! [`Station`] lives here too: POIs without address info carry no usable
//! location and are skipped.

use serde::Deserialize;

use crate::domain::{Connection, GeoPoint, Station};

/// One point of interest (charging site) from the API.
#[derive(Debug, Clone, Deserialize)]
pub struct WirePoi {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "AddressInfo")]
    pub address_info: Option<WireAddressInfo>,
    #[serde(rename = "Connections", default)]
    pub connections: Vec<WireConnection>,
    #[serde(rename = "StatusType")]
    pub status_type: Option<WireStatusType>,
    #[serde(rename = "OperatorInfo")]
    pub operator_info: Option<WireOperatorInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireAddressInfo {
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireConnection {
    #[serde(rename = "PowerKW")]
    pub power_kw: Option<f64>,
    #[serde(rename = "Amps")]
    pub amps: Option<f64>,
    #[serde(rename = "Voltage")]
    pub voltage: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireStatusType {
    #[serde(rename = "Title")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireOperatorInfo {
    #[serde(rename = "Title")]
    pub title: Option<String>,
}

impl WirePoi {
    /// Convert to a domain station, or `None` when the POI has no location.
    pub fn into_station(self) -> Option<Station> {
        let address = self.address_info?;

        Some(Station {
            id: self.id,
            location: GeoPoint::new(address.latitude, address.longitude),
            title: address.title.unwrap_or_default(),
            operator: self.operator_info.and_then(|o| o.title),
            status: self.status_type.and_then(|s| s.title),
            connections: self
                .connections
                .into_iter()
                .map(|c| Connection {
                    power_kw: c.power_kw,
                    amps: c.amps,
                    voltage: c.voltage,
                })
                .collect(),
        })
    }
}
