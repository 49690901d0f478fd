//! MCP server exposing the `get_weather` tool.

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::transport::stdio;
use rmcp::{ErrorData as McpError, ServerHandler, ServiceExt, tool, tool_handler, tool_router};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, warn};
use weather_core::WeatherLookup;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetWeatherParams {
    /// The name of the city to fetch the weather for.
    pub city: String,
}

#[derive(Clone)]
pub struct WeatherServer {
    lookup: WeatherLookup,
    tool_router: ToolRouter<Self>,
}

impl WeatherServer {
    pub fn new(lookup: WeatherLookup) -> Self {
        Self { lookup, tool_router: Self::tool_router() }
    }
}

#[tool_router]
impl WeatherServer {
    #[tool(
        name = "get_weather",
        description = "Fetch the current weather for a given city. Returns temperature (°C), humidity, description, icon, wind, cloudiness, observation time, timezone offset and country."
    )]
    pub async fn get_weather(
        &self,
        Parameters(params): Parameters<GetWeatherParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = match self.lookup.lookup_city(&params.city).await {
            Ok(result) => result,
            Err(err) => {
                warn!(city = %params.city, kind = ?err.kind(), "get_weather failed");
                return Ok(CallToolResult::error(vec![Content::text(err.to_string())]));
            }
        };

        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for WeatherServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Current weather lookups backed by OpenWeather. Call 'get_weather' with a city name."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}

/// Serve on stdio until the client disconnects.
pub async fn serve(lookup: WeatherLookup) -> anyhow::Result<()> {
    info!("Starting weather MCP server");

    let service = WeatherServer::new(lookup).serve(stdio()).await?;
    service.waiting().await?;

    info!("Weather MCP server stopped");
    Ok(())
}
