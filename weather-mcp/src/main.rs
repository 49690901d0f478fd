//! Binary crate for the `weather-mcp` tool server.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Serving the `get_weather` tool over MCP stdio
//! - Interactive configuration
//! - Human-friendly output formatting

use clap::Parser;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod cli;
mod server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();

    // stdout carries the MCP protocol, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    if let Some(err) = dotenv_problem(dotenv) {
        warn!(error = %err, "Ignoring unreadable .env file");
    }

    let cmd = cli::Cli::parse();
    cmd.run().await
}

/// A missing `.env` is normal; anything else is worth reporting.
fn dotenv_problem(result: Result<PathBuf, dotenvy::Error>) -> Option<dotenvy::Error> {
    result.err().filter(|err| !err.not_found())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn missing_dotenv_is_silent() {
        let missing = dotenvy::Error::Io(io::Error::from(io::ErrorKind::NotFound));

        assert!(dotenv_problem(Err(missing)).is_none());
        assert!(dotenv_problem(Ok(PathBuf::from(".env"))).is_none());
    }

    #[test]
    fn malformed_dotenv_is_reported() {
        let malformed = dotenvy::Error::LineParse("OPENWEATHER_API_KEY 'abc".into(), 24);
        let unreadable = dotenvy::Error::Io(io::Error::from(io::ErrorKind::PermissionDenied));

        assert!(dotenv_problem(Err(malformed)).is_some());
        assert!(dotenv_problem(Err(unreadable)).is_some());
    }
}
