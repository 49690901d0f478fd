use thiserror::Error;

/// Classification of a failed lookup, without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Configuration,
    Resolution,
    Upstream,
}

/// OpenWeather endpoint a request was sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Geocoding,
    Weather,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Endpoint::Geocoding => "geocoding",
            Endpoint::Weather => "weather",
        })
    }
}

/// Failure talking to, or understanding, the OpenWeather service.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Non-success HTTP status. The body is kept verbatim.
    #[error("Error fetching {endpoint} data: {status} - {body}")]
    Status { endpoint: Endpoint, status: u16, body: String },

    #[error("Unexpected response format from OpenWeather API.")]
    UnexpectedFormat,

    #[error("OpenWeather request timed out")]
    Timeout,

    #[error("OpenWeather request failed: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UpstreamError::Timeout
        } else {
            UpstreamError::Transport(err.to_string())
        }
    }
}

/// Error returned by [`crate::WeatherLookup::lookup`].
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("API key for OpenWeather is not set.\nHint: set OPENWEATHER_API_KEY or run `weather-mcp configure`.")]
    Configuration,

    #[error("Could not find coordinates for city: {city}")]
    Resolution { city: String },

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl LookupError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LookupError::Configuration => ErrorKind::Configuration,
            LookupError::Resolution { .. } => ErrorKind::Resolution,
            LookupError::Upstream(_) => ErrorKind::Upstream,
        }
    }

    /// HTTP status reported by the upstream service, if the failure carried one.
    pub fn status(&self) -> Option<u16> {
        match self {
            LookupError::Upstream(UpstreamError::Status { status, .. }) => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_keeps_body_verbatim() {
        let err = LookupError::from(UpstreamError::Status {
            endpoint: Endpoint::Weather,
            status: 401,
            body: r#"{"cod":401, "message": "Invalid API key."}"#.to_string(),
        });

        assert_eq!(err.kind(), ErrorKind::Upstream);
        assert_eq!(err.status(), Some(401));
        assert!(err.to_string().starts_with("Error fetching weather data: 401 - "));
        assert!(err.to_string().contains(r#""message": "Invalid API key.""#));
    }

    #[test]
    fn resolution_error_names_city() {
        let err = LookupError::Resolution { city: "Atlantis".into() };

        assert_eq!(err.kind(), ErrorKind::Resolution);
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("Atlantis"));
    }
}
