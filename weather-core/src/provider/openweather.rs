use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

use crate::{config::Config, error::UpstreamError, model::Coordinate};

use super::{ApiReply, WeatherApi};

/// HTTP client for the OpenWeather geocoding and current-weather endpoints.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    http: Client,
    base_url: String,
}

impl OpenWeatherClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self { http, base_url: base_url.into() }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("weather-core/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client for OpenWeather")?;

        Ok(Self::new(http, config.base_url()))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get(&self, url: String, query: &[(&str, &str)]) -> Result<ApiReply, UpstreamError> {
        let res = self.http.get(url).query(query).send().await?;

        let status = res.status().as_u16();
        let body = res.text().await?;

        Ok(ApiReply { status, body })
    }
}

#[async_trait]
impl WeatherApi for OpenWeatherClient {
    async fn geocode(&self, city: &str, api_key: &str) -> Result<ApiReply, UpstreamError> {
        self.get(self.url("/geo/1.0/direct"), &[("q", city), ("appid", api_key)]).await
    }

    async fn current_weather(
        &self,
        coord: Coordinate,
        api_key: &str,
    ) -> Result<ApiReply, UpstreamError> {
        let lat = coord.latitude.to_string();
        let lon = coord.longitude.to_string();

        self.get(
            self.url("/data/2.5/weather"),
            &[
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("appid", api_key),
                ("units", "metric"),
            ],
        )
        .await
    }
}
