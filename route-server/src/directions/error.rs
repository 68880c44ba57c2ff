//! Directions client error types.

use crate::domain::PolylineError;

/// Errors from the directions provider.
///
/// Any of these is fatal to the request that triggered the lookup: the
/// planner never retries at this layer and never returns a partial plan.
#[derive(Debug, thiserror::Error)]
pub enum DirectionsError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider could not produce a route.
    #[error("no route found ({status}){}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    NoRoute {
        status: String,
        message: Option<String>,
    },

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// The overview polyline could not be decoded
    #[error("polyline decode error: {0}")]
    Polyline(#[from] PolylineError),

    /// A required input was missing
    #[error("missing required input: {0}")]
    MissingInput(&'static str),

    /// Invalid or missing API key
    #[error("unauthorized: check GOOGLE_MAPS_API_KEY")]
    Unauthorized,

    /// Rate limited by the provider
    #[error("rate limited by directions provider")]
    RateLimited,
}
