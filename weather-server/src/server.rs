use rmcp::ErrorData as McpError;
use rmcp::ServerHandler;
use rmcp::model::*;
use rmcp::service::{RequestContext, RoleServer};
use schemars::{JsonSchema, schema_for};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

use weather_core::AlertService;

pub const GET_ALERTS: &str = "get_alerts";

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetAlertsArgs {
    /// Two-letter US state code (e.g. CA, NY)
    pub state: String,
}

/// MCP server exposing the `get_alerts` tool.
#[derive(Debug, Clone)]
pub struct WeatherServer {
    alerts: AlertService,
}

impl WeatherServer {
    pub fn new(alerts: AlertService) -> Self {
        Self { alerts }
    }

    pub fn tools() -> Result<Vec<Tool>, McpError> {
        Ok(vec![Tool {
            name: GET_ALERTS.into(),
            title: Some("Weather alerts".into()),
            description: Some("Get weather alerts for a US state.".into()),
            input_schema: to_schema::<GetAlertsArgs>()?,
            output_schema: None,
            annotations: None,
            icons: None,
        }])
    }

    /// Route a tool call by name.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        let args_value = serde_json::Value::Object(arguments.unwrap_or_default());

        match name {
            GET_ALERTS => {
                let args: GetAlertsArgs = serde_json::from_value(args_value).map_err(|e| {
                    McpError::invalid_params(format!("Invalid arguments: {}", e), None)
                })?;
                debug!(state = %args.state, "get_alerts called");
                let text = self.alerts.get_alerts(&args.state).await;
                Ok(CallToolResult::success(vec![Content::text(text)]))
            }
            _ => Err(McpError::method_not_found::<CallToolRequestMethod>()),
        }
    }
}

fn to_schema<T: JsonSchema>() -> Result<Arc<JsonObject>, McpError> {
    let schema = schema_for!(T);
    let json_value = serde_json::to_value(schema).map_err(|e| {
        McpError::internal_error(format!("Failed to serialize schema: {}", e), None)
    })?;
    let object = json_value
        .as_object()
        .ok_or_else(|| McpError::internal_error("Schema is not a JSON object", None))?
        .clone();
    Ok(Arc::new(object))
}

impl ServerHandler for WeatherServer {
    fn get_info(&self) -> InitializeResult {
        InitializeResult {
            protocol_version: ProtocolVersion::V_2024_11_05,
            server_info: Implementation {
                name: "weather".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: Some("NWS weather alerts".into()),
                icons: None,
                website_url: None,
            },
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(
                "Looks up active National Weather Service alerts for a US state. \
                 Call get_alerts with a two-letter state code."
                    .into(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult { tools: Self::tools()?, next_cursor: None })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.dispatch(request.name.as_ref(), request.arguments).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use weather_core::{AlertPayload, AlertProvider, Config, FetchError};

    #[derive(Debug)]
    struct CannedProvider(Option<serde_json::Value>);

    #[async_trait]
    impl AlertProvider for CannedProvider {
        async fn fetch(&self, url: &str) -> Result<AlertPayload, FetchError> {
            match &self.0 {
                Some(json) => serde_json::from_value(json.clone())
                    .map_err(|source| FetchError::Decode { url: url.to_string(), source }),
                None => Err(FetchError::Timeout { url: url.to_string() }),
            }
        }
    }

    fn server(response: Option<serde_json::Value>) -> WeatherServer {
        let provider = Arc::new(CannedProvider(response));
        WeatherServer::new(AlertService::new(Config::default(), provider))
    }

    fn args(value: serde_json::Value) -> Option<JsonObject> {
        value.as_object().cloned()
    }

    fn text_of(result: &CallToolResult) -> String {
        result.content[0].as_text().expect("text content").text.clone()
    }

    #[test]
    fn lists_only_get_alerts() {
        let tools = WeatherServer::tools().unwrap();

        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "get_alerts");

        let schema = &tools[0].input_schema;
        assert_eq!(schema.get("required"), Some(&json!(["state"])));
        assert!(schema["properties"].get("state").is_some());
    }

    #[test]
    fn advertises_tools_capability() {
        let info = server(None).get_info();
        assert!(info.capabilities.tools.is_some());
        assert_eq!(info.server_info.name, "weather");
    }

    #[tokio::test]
    async fn get_alerts_returns_text() {
        let srv = server(Some(json!({
            "features": [{ "properties": { "event": "Flood Warning" } }]
        })));

        let result = srv.dispatch("get_alerts", args(json!({ "state": "CA" }))).await.unwrap();

        let text = text_of(&result);
        assert!(text.contains("Event: Flood Warning"));
        assert!(text.contains("Area: Unknown"));
        assert_ne!(result.is_error, Some(true));
    }

    #[tokio::test]
    async fn fetch_failure_is_text_not_error() {
        let srv = server(None);

        let result = srv.dispatch("get_alerts", args(json!({ "state": "NY" }))).await.unwrap();

        assert_eq!(text_of(&result), "unable to fetch alerts");
    }

    #[tokio::test]
    async fn empty_features_message() {
        let srv = server(Some(json!({ "features": [] })));

        let result = srv.dispatch("get_alerts", args(json!({ "state": "HI" }))).await.unwrap();

        assert_eq!(text_of(&result), "NO active alerts for this state");
    }

    #[tokio::test]
    async fn missing_state_is_invalid_params() {
        let srv = server(None);

        let err = srv.dispatch("get_alerts", None).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn unknown_tool_is_method_not_found() {
        let srv = server(None);

        let err = srv.dispatch("get_forecast", args(json!({ "state": "CA" }))).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::METHOD_NOT_FOUND);
    }
}
