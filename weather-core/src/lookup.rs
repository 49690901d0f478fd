use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::{
    config::Config,
    error::{Endpoint, LookupError, UpstreamError},
    model::{Coordinate, LookupRequest, WeatherResult},
    provider::{ApiReply, OpenWeatherClient, WeatherApi},
};

/// Geocode, fetch current conditions, normalize.
///
/// Holds no per-call state; clones share the underlying HTTP client.
#[derive(Debug, Clone)]
pub struct WeatherLookup {
    api_key: Option<String>,
    api: Arc<dyn WeatherApi>,
}

impl WeatherLookup {
    pub fn new(api_key: Option<String>, api: Arc<dyn WeatherApi>) -> Self {
        Self { api_key, api }
    }

    /// Build a lookup backed by the real OpenWeather client.
    ///
    /// A missing API key is not an error here; it surfaces on the first lookup.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = OpenWeatherClient::from_config(config)?;
        Ok(Self::new(config.api_key().map(str::to_owned), Arc::new(client)))
    }

    pub async fn lookup_city(&self, city: &str) -> Result<WeatherResult, LookupError> {
        self.lookup(&LookupRequest::new(city)).await
    }

    #[tracing::instrument(level = "debug", skip_all, fields(city = %request.city))]
    pub async fn lookup(&self, request: &LookupRequest) -> Result<WeatherResult, LookupError> {
        let api_key = self.api_key.as_deref().ok_or(LookupError::Configuration)?;

        let coord = self.resolve(&request.city, api_key).await?;
        debug!(lat = coord.latitude, lon = coord.longitude, "resolved coordinates");

        let reply = self.api.current_weather(coord, api_key).await.inspect_err(|e| {
            warn!(error = %e, "weather request failed");
        })?;
        let payload = expect_success(Endpoint::Weather, reply)?;

        let result = WeatherResult::from_payload(&payload)?;
        debug!(name = ?result.city, "normalized current weather");

        Ok(result)
    }

    async fn resolve(&self, city: &str, api_key: &str) -> Result<Coordinate, LookupError> {
        let reply = self.api.geocode(city, api_key).await.inspect_err(|e| {
            warn!(error = %e, "geocoding request failed");
        })?;
        let candidates = expect_success(Endpoint::Geocoding, reply)?;

        let candidates = candidates.as_array().ok_or(UpstreamError::UnexpectedFormat)?;
        debug!(candidates = candidates.len(), "geocoding replied");

        candidates
            .first()
            .and_then(Coordinate::from_candidate)
            .ok_or_else(|| LookupError::Resolution { city: city.to_owned() })
    }
}

/// Non-success status keeps the body verbatim; a success body must be JSON.
fn expect_success(endpoint: Endpoint, reply: ApiReply) -> Result<Value, UpstreamError> {
    if !reply.is_success() {
        warn!(%endpoint, status = reply.status, "OpenWeather returned an error status");
        return Err(UpstreamError::Status { endpoint, status: reply.status, body: reply.body });
    }

    serde_json::from_str(&reply.body).map_err(|_| UpstreamError::UnexpectedFormat)
}
