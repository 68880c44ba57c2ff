//! Directions HTTP client.
//!
//! Provides async methods for querying the Google Directions and Geocoding
//! APIs and converting the responses to domain types.

use crate::domain::{GeoPoint, RouteGeometry};

use super::RouteProvider;
use super::convert::convert_response;
use super::error::DirectionsError;
use super::types::DirectionsResponse;

/// Default base URL for the Google Maps web services.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Configuration for the directions client.
#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    /// API key passed as the `key` query parameter
    pub api_key: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DirectionsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for the directions provider.
#[derive(Debug, Clone)]
pub struct DirectionsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl DirectionsClient {
    /// Create a new directions client with the given configuration.
    pub fn new(config: DirectionsConfig) -> Result<Self, DirectionsError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// Fetch a driving route.
    ///
    /// Waypoints, when present, are visited in the given order; the
    /// response then carries one leg per waypoint segment.
    pub async fn route(
        &self,
        origin: &str,
        destination: &str,
        waypoints: &[GeoPoint],
    ) -> Result<RouteGeometry, DirectionsError> {
        if origin.is_empty() {
            return Err(DirectionsError::MissingInput("origin"));
        }
        if destination.is_empty() {
            return Err(DirectionsError::MissingInput("destination"));
        }

        let url = format!("{}/directions/json", self.base_url);

        let mut query = vec![
            ("origin".to_string(), origin.to_string()),
            ("destination".to_string(), destination.to_string()),
            ("key".to_string(), self.api_key.clone()),
        ];
        if !waypoints.is_empty() {
            let joined = waypoints
                .iter()
                .map(GeoPoint::as_waypoint)
                .collect::<Vec<_>>()
                .join("|");
            query.push(("waypoints".to_string(), joined));
        }

        let response = self.http.get(&url).query(&query).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(DirectionsError::Unauthorized);
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(DirectionsError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectionsError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let parsed: DirectionsResponse =
            serde_json::from_str(&body).map_err(|e| DirectionsError::Json {
                message: e.to_string(),
            })?;

        convert_response(&parsed)
    }

    /// Geocode an address.
    ///
    /// A pass-through lookup: returns the provider's result objects
    /// unmodified, since the planner itself never inspects them.
    pub async fn geocode(&self, address: &str) -> Result<Vec<serde_json::Value>, DirectionsError> {
        if address.is_empty() {
            return Err(DirectionsError::MissingInput("address"));
        }

        let url = format!("{}/geocode/json", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("address", address), ("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectionsError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        #[derive(serde::Deserialize)]
        struct GeocodeResponse {
            status: String,
            #[serde(default)]
            results: Vec<serde_json::Value>,
            error_message: Option<String>,
        }

        let body = response.text().await?;
        let parsed: GeocodeResponse =
            serde_json::from_str(&body).map_err(|e| DirectionsError::Json {
                message: e.to_string(),
            })?;

        if parsed.status != "OK" {
            return Err(DirectionsError::NoRoute {
                status: parsed.status,
                message: parsed.error_message,
            });
        }

        Ok(parsed.results)
    }
}

impl RouteProvider for DirectionsClient {
    async fn fetch_route(
        &self,
        origin: &str,
        destination: &str,
        waypoints: &[GeoPoint],
    ) -> Result<RouteGeometry, DirectionsError> {
        self.route(origin, destination, waypoints).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = DirectionsConfig::new("test-key")
            .with_base_url("http://localhost:8080")
            .with_timeout(60);

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn config_defaults() {
        let config = DirectionsConfig::new("test-key");

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn client_creation() {
        let client = DirectionsClient::new(DirectionsConfig::new("test-key"));
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn empty_origin_is_rejected_before_any_request() {
        let client = DirectionsClient::new(DirectionsConfig::new("test-key")).unwrap();
        let result = client.route("", "Birmingham", &[]).await;
        assert!(matches!(
            result,
            Err(DirectionsError::MissingInput("origin"))
        ));
    }
}
