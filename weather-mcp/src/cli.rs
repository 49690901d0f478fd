use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode};
use tracing::warn;
use weather_core::{Config, WeatherLookup, WeatherResult};

use crate::server;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-mcp", version, about = "Current weather as an MCP tool")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the `get_weather` tool over stdio.
    Serve,

    /// Show current weather for a city.
    Show {
        /// City name, free text.
        city: String,

        /// Print the raw result record as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Store the OpenWeather API key in the config file.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Serve => {
                let config = Config::load()?;
                if config.api_key().is_none() {
                    warn!("No OpenWeather API key configured; every lookup will fail until one is set");
                }
                server::serve(WeatherLookup::from_config(&config)?).await?;
            }
            Command::Show { city, json } => {
                let config = Config::load()?;
                let lookup = WeatherLookup::from_config(&config)?;
                let result = lookup.lookup_city(&city).await?;

                if json {
                    let out = serde_json::to_string_pretty(&result)
                        .context("Failed to serialize weather result")?;
                    println!("{out}");
                } else {
                    print!("{}", render(&result, &city));
                }
            }
            Command::Configure => configure()?,
        }

        Ok(())
    }
}

fn configure() -> anyhow::Result<()> {
    // File only: values coming from the environment are not persisted.
    let mut config = Config::load_file()?;

    let key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    if key.trim().is_empty() {
        bail!("API key must not be empty");
    }

    config.set_api_key(key);
    let path = config.save()?;
    println!("Saved configuration to {}", path.display());

    Ok(())
}

/// Human-readable rendering; absent fields print as `n/a`.
fn render(result: &WeatherResult, queried: &str) -> String {
    fn or_na<T: ToString>(value: Option<T>) -> String {
        value.map(|v| v.to_string()).unwrap_or_else(|| "n/a".to_string())
    }

    let name = result.city.as_deref().unwrap_or(queried);
    let heading = match &result.country {
        Some(country) => format!("{name}, {country}"),
        None => name.to_string(),
    };

    let conditions = match (&result.description, &result.icon) {
        (Some(desc), Some(icon)) => format!("{desc} ({icon})"),
        (Some(desc), None) => desc.clone(),
        _ => "n/a".to_string(),
    };

    let wind = match (result.wind_speed, result.wind_direction) {
        (Some(speed), Some(deg)) => format!("{speed} m/s from {deg}°"),
        (Some(speed), None) => format!("{speed} m/s"),
        _ => "n/a".to_string(),
    };

    let observed = result
        .observed_at()
        .map(|at| at.format("%Y-%m-%d %H:%M %:z").to_string())
        .unwrap_or_else(|| "n/a".to_string());

    format!(
        "{heading}\n  Conditions:  {conditions}\n  Temperature: {} °C\n  Humidity:    {} %\n  Wind:        {wind}\n  Clouds:      {} %\n  Observed:    {observed}\n",
        or_na(result.temperature),
        or_na(result.humidity),
        or_na(result.cloudiness),
    )
}
