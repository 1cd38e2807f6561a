use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Result, ToolError};
use crate::types::response::ToolOutcome;

/// A travel-search tool addressable by name
pub trait Tool: Send + Sync + std::fmt::Debug {
    /// The name of the tool (used in invocation requests)
    fn name(&self) -> &'static str;

    /// A description of what the tool does
    fn description(&self) -> &'static str;

    /// JSON Schema for the tool's parameters
    fn parameters_schema(&self) -> Value;

    /// Execute the tool with given parameters
    fn execute(
        &self,
        parameters: Value,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<ToolOutcome>> + Send + '_>>;
}

/// Deserialize a tool's parameter payload, reporting the JSON path of the
/// first mismatch.
pub(crate) fn parse_params<T: DeserializeOwned>(tool: &'static str, parameters: Value) -> Result<T> {
    serde_path_to_error::deserialize(parameters).map_err(|err| {
        let path = err.path().to_string();
        let location = if path.is_empty() || path == "." {
            "<root>".to_string()
        } else {
            path
        };
        ToolError::Validation(format!(
            "Invalid parameters for `{tool}` at {location}: {}",
            err.into_inner()
        ))
    })
}

/// Registry of available tools
#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        self.tools.insert(tool.name().to_string(), Box::new(tool));
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    /// Get all registered tools
    pub fn list(&self) -> Vec<&dyn Tool> {
        self.tools.values().map(|tool| tool.as_ref()).collect()
    }

    /// Describe every registered tool for the request/response protocol
    pub fn describe(&self) -> Vec<Value> {
        let mut described: Vec<Value> = self
            .tools
            .values()
            .map(|tool| {
                serde_json::json!({
                    "name": tool.name(),
                    "description": tool.description(),
                    "parameters": tool.parameters_schema()
                })
            })
            .collect();
        described.sort_by_key(|tool| tool["name"].as_str().unwrap_or_default().to_string());
        described
    }
}
