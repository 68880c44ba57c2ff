//! Charge-map client error types.

/// Errors from the charging-station provider.
///
/// Inside the along-route sampling loop these are recovered by omission:
/// a failed point simply contributes no stations. Direct lookups surface
/// them to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ChargeMapError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Invalid or missing API key
    #[error("unauthorized: check OPENCHARGEMAP_API_KEY")]
    Unauthorized,

    /// Rate limited by the provider
    #[error("rate limited by charge map API")]
    RateLimited,
}
