use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{error::UpstreamError, extract::Extract};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupRequest {
    pub city: String,
}

impl LookupRequest {
    pub fn new(city: impl Into<String>) -> Self {
        Self { city: city.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Reads `lat`/`lon` off a geocoding candidate. Both must be present.
    pub fn from_candidate(candidate: &Value) -> Option<Self> {
        Some(Self {
            latitude: candidate.f64_at("/lat")?,
            longitude: candidate.f64_at("/lon")?,
        })
    }
}

/// Normalized current conditions. Absent fields serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResult {
    /// Name confirmed by the provider; may differ from the queried text.
    pub city: Option<String>,
    /// Degrees Celsius.
    pub temperature: Option<f64>,
    /// Percent.
    pub humidity: Option<i64>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub wind_speed: Option<f64>,
    /// Degrees.
    pub wind_direction: Option<i64>,
    /// Percent.
    pub cloudiness: Option<i64>,
    /// Observation time, epoch seconds.
    pub timestamp: Option<i64>,
    /// Offset from UTC in seconds.
    pub timezone: Option<i64>,
    pub country: Option<String>,
}

impl WeatherResult {
    /// Builds a result from a current-weather payload.
    ///
    /// Only `main` and `weather` are required; every other field degrades to
    /// `None` when missing.
    pub fn from_payload(payload: &Value) -> Result<Self, UpstreamError> {
        if !payload.has("/main") || !payload.has("/weather") {
            return Err(UpstreamError::UnexpectedFormat);
        }

        Ok(Self {
            city: payload.str_at("/name"),
            temperature: payload.f64_at("/main/temp"),
            humidity: payload.i64_at("/main/humidity"),
            description: payload.str_at("/weather/0/description"),
            icon: payload.str_at("/weather/0/icon"),
            wind_speed: payload.f64_at("/wind/speed"),
            wind_direction: payload.i64_at("/wind/deg"),
            cloudiness: payload.i64_at("/clouds/all"),
            timestamp: payload.i64_at("/dt"),
            timezone: payload.i64_at("/timezone"),
            country: payload.str_at("/sys/country"),
        })
    }

    /// Observation time in the location's own UTC offset.
    pub fn observed_at(&self) -> Option<DateTime<FixedOffset>> {
        let offset = FixedOffset::east_opt(i32::try_from(self.timezone?).ok()?)?;
        let utc = DateTime::from_timestamp(self.timestamp?, 0)?;
        Some(utc.with_timezone(&offset))
    }
}
