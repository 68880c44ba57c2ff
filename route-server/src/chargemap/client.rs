//! Open Charge Map HTTP client.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};

use crate::domain::{GeoPoint, Station};

use super::StationProvider;
use super::error::ChargeMapError;
use super::types::WirePoi;

/// Default base URL for the Open Charge Map POI API.
const DEFAULT_BASE_URL: &str = "https://api.openchargemap.io/v3";

/// User agent sent with every request, as the API asks of integrators.
const CLIENT_USER_AGENT: &str = "route-server/0.1";

/// Configuration for the charge-map client.
#[derive(Debug, Clone)]
pub struct ChargeMapConfig {
    /// API key, optional for Open Charge Map but recommended.
    pub api_key: Option<String>,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ChargeMapConfig {
    /// Create a new config. Pass `None` to go keyless.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

/// Query filters for station lookup, passed through to the provider.
#[derive(Debug, Clone)]
pub struct StationFilters {
    /// ISO country code restriction.
    pub country_code: String,
    /// Maximum stations per lookup.
    pub max_results: u32,
    /// Charger level id (2 = fast, 3 = rapid).
    pub level_id: Option<u32>,
    /// Usage type id (e.g. public).
    pub usage_type_id: Option<u32>,
    /// Connection type id restriction.
    pub connection_type_id: Option<u32>,
}

impl Default for StationFilters {
    fn default() -> Self {
        Self {
            country_code: "GB".to_string(),
            max_results: 50,
            level_id: None,
            usage_type_id: None,
            connection_type_id: None,
        }
    }
}

/// Client for the Open Charge Map POI API.
#[derive(Debug, Clone)]
pub struct ChargeMapClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl ChargeMapClient {
    /// Create a new charge-map client with the given configuration.
    pub fn new(config: ChargeMapConfig) -> Result<Self, ChargeMapError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// Fetch stations within `radius_km` of `point`.
    pub async fn stations_near(
        &self,
        point: GeoPoint,
        radius_km: f64,
        filters: &StationFilters,
    ) -> Result<Vec<Station>, ChargeMapError> {
        let url = format!("{}/poi/", self.base_url);

        let mut query = vec![
            ("output".to_string(), "json".to_string()),
            ("compact".to_string(), "true".to_string()),
            ("verbose".to_string(), "false".to_string()),
            ("latitude".to_string(), point.lat.to_string()),
            ("longitude".to_string(), point.lng.to_string()),
            ("distance".to_string(), radius_km.to_string()),
            ("distanceunit".to_string(), "KM".to_string()),
            ("maxresults".to_string(), filters.max_results.to_string()),
            ("countrycode".to_string(), filters.country_code.clone()),
        ];
        if let Some(level) = filters.level_id {
            query.push(("levelid".to_string(), level.to_string()));
        }
        if let Some(usage) = filters.usage_type_id {
            query.push(("usagetypeid".to_string(), usage.to_string()));
        }
        if let Some(conn) = filters.connection_type_id {
            query.push(("connectiontypeid".to_string(), conn.to_string()));
        }
        if let Some(key) = &self.api_key {
            query.push(("key".to_string(), key.clone()));
        }

        let response = self.http.get(&url).query(&query).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(ChargeMapError::Unauthorized);
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ChargeMapError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChargeMapError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let pois: Vec<WirePoi> = serde_json::from_str(&body).map_err(|e| ChargeMapError::Json {
            message: e.to_string(),
        })?;

        Ok(pois.into_iter().filter_map(WirePoi::into_station).collect())
    }
}

impl StationProvider for ChargeMapClient {
    async fn fetch_stations_near(
        &self,
        point: GeoPoint,
        radius_km: f64,
        filters: &StationFilters,
    ) -> Result<Vec<Station>, ChargeMapError> {
        self.stations_near(point, radius_km, filters).await
    }
}
