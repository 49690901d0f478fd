use crate::{error::UpstreamError, model::Coordinate};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

pub use openweather::OpenWeatherClient;

/// Raw HTTP reply from the weather service, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiReply {
    pub status: u16,
    pub body: String,
}

impl ApiReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The two endpoints a lookup talks to.
///
/// Implementations only move bytes; status and payload checks belong to
/// [`crate::WeatherLookup`].
#[async_trait]
pub trait WeatherApi: Send + Sync + Debug {
    /// Direct geocoding: city text to candidate locations.
    async fn geocode(&self, city: &str, api_key: &str) -> Result<ApiReply, UpstreamError>;

    /// Current conditions at a coordinate, metric units.
    async fn current_weather(
        &self,
        coord: Coordinate,
        api_key: &str,
    ) -> Result<ApiReply, UpstreamError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range() {
        assert!(ApiReply::new(200, "").is_success());
        assert!(ApiReply::new(204, "").is_success());
        assert!(!ApiReply::new(401, "").is_success());
        assert!(!ApiReply::new(500, "").is_success());
        assert!(!ApiReply::new(302, "").is_success());
    }
}
