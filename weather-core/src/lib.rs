//! Core library for the `weather-mcp` tool server.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The upstream API seam ([`WeatherApi`]) and its OpenWeather HTTP client
//! - Absent-tolerant extraction over provider JSON
//! - [`WeatherLookup`]: city name → coordinates → current weather
//!
//! It is used by `weather-mcp`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod extract;
pub mod lookup;
pub mod model;
pub mod provider;

pub use config::Config;
pub use error::{Endpoint, ErrorKind, LookupError, UpstreamError};
pub use lookup::WeatherLookup;
pub use model::{Coordinate, LookupRequest, WeatherResult};
pub use provider::{ApiReply, OpenWeatherClient, WeatherApi};
