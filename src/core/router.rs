use serde_json::Value;
use tracing::{debug, error, warn};

use crate::error::{Result, ToolError};
use crate::schemas::validate_params;
use crate::tools::tool::{Tool, ToolRegistry};
use crate::types::response::{format_response, ToolOutcome};

/// Dispatch boundary for tool invocations
///
/// Resolves a tool by name, validates the parameter payload against the
/// tool's schema, runs it, and converts whatever comes back into the single
/// tool response shape. No failure escapes `dispatch` uncaught: every
/// invocation yields exactly one JSON response.
#[derive(Debug, Default)]
pub struct ToolRouter {
    registry: ToolRegistry,
}

impl ToolRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool with the router
    pub fn register_tool<T: Tool + 'static>(&mut self, tool: T) {
        self.registry.register(tool);
    }

    /// Check if a tool exists
    pub fn has_tool(&self, name: &str) -> bool {
        self.registry.get(name).is_some()
    }

    /// Describe every registered tool for protocol listings
    pub fn describe_tools(&self) -> Vec<Value> {
        self.registry.describe()
    }

    /// Invoke a tool by name, always yielding a well-formed response
    pub async fn dispatch(&self, name: &str, parameters: Value) -> Value {
        let result = self.try_dispatch(name, parameters).await;

        if let Err(err) = &result {
            match err {
                ToolError::Internal(_) => {
                    error!(tool = name, kind = err.kind(), "{err}");
                }
                ToolError::UpstreamApi { .. } => {
                    warn!(tool = name, kind = err.kind(), "{err}");
                }
                _ => {
                    debug!(tool = name, kind = err.kind(), "{err}");
                }
            }
        }

        format_response(result)
    }

    async fn try_dispatch(&self, name: &str, parameters: Value) -> Result<ToolOutcome> {
        let tool = self
            .registry
            .get(name)
            .ok_or_else(|| ToolError::Validation(format!("Unknown tool: {name}")))?;

        validate_params(name, &tool.parameters_schema(), &parameters)?;

        tool.execute(parameters).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::response::ToolOutcome;
    use serde_json::json;
    use std::pin::Pin;

    #[derive(Debug)]
    struct EchoTool;

    impl Tool for EchoTool {
        fn name(&self) -> &'static str {
            "echo"
        }

        fn description(&self) -> &'static str {
            "Echo the payload back"
        }

        fn parameters_schema(&self) -> Value {
            json!({
                "type": "object",
                "properties": { "message": { "type": "string" } },
                "required": ["message"]
            })
        }

        fn execute(
            &self,
            parameters: Value,
        ) -> Pin<Box<dyn std::future::Future<Output = crate::error::Result<ToolOutcome>> + Send + '_>>
        {
            Box::pin(async move { Ok(ToolOutcome::Data(parameters)) })
        }
    }

    #[derive(Debug)]
    struct FailingTool;

    impl Tool for FailingTool {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn description(&self) -> &'static str {
            "Always fails unexpectedly"
        }

        fn parameters_schema(&self) -> Value {
            json!({ "type": "object" })
        }

        fn execute(
            &self,
            _parameters: Value,
        ) -> Pin<Box<dyn std::future::Future<Output = crate::error::Result<ToolOutcome>> + Send + '_>>
        {
            Box::pin(async move { Err(ToolError::Internal("connection reset by peer".into())) })
        }
    }

    #[tokio::test]
    async fn unknown_tool_is_a_validation_error() {
        let router = ToolRouter::new();
        let response = router.dispatch("nope", json!({})).await;
        assert_eq!(response["error"], "Unknown tool: nope");
    }

    #[tokio::test]
    async fn schema_violations_are_rejected_before_execution() {
        let mut router = ToolRouter::new();
        router.register_tool(EchoTool);

        let response = router.dispatch("echo", json!({ "message": 42 })).await;
        let message = response["error"].as_str().unwrap();
        assert!(message.contains("Invalid parameters for `echo`"));
    }

    #[tokio::test]
    async fn internal_failures_still_yield_a_response() {
        let mut router = ToolRouter::new();
        router.register_tool(FailingTool);

        let response = router.dispatch("failing", json!({})).await;
        assert_eq!(
            response["error"],
            "Internal error: connection reset by peer"
        );
    }

    #[tokio::test]
    async fn successful_dispatch_passes_payload_through() {
        let mut router = ToolRouter::new();
        router.register_tool(EchoTool);

        let response = router.dispatch("echo", json!({ "message": "hi" })).await;
        assert_eq!(response, json!({ "message": "hi" }));
    }

    #[tokio::test]
    async fn describe_lists_registered_tools() {
        let mut router = ToolRouter::new();
        router.register_tool(EchoTool);
        router.register_tool(FailingTool);

        let described = router.describe_tools();
        let names: Vec<&str> = described
            .iter()
            .map(|tool| tool["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["echo", "failing"]);
        assert!(router.has_tool("echo"));
        assert!(!router.has_tool("absent"));
    }
}
