//! Parameter-schema generation and validation for the tool surface

use jsonschema::{Draft, JSONSchema};
use serde_json::Value;

use crate::error::ToolError;

const MAX_SCHEMA_ERRORS: usize = 3;

/// Derive the JSON Schema for a tool's parameter struct
pub fn params_schema<T: schemars::JsonSchema>() -> Value {
    let root = schemars::gen::SchemaGenerator::default().into_root_schema_for::<T>();
    serde_json::to_value(root).unwrap_or_else(|_| serde_json::json!({ "type": "object" }))
}

/// Validate an incoming parameter payload against a tool's schema
///
/// Reports at most three violations; the rest are summarized as truncated.
pub fn validate_params(
    tool: &str,
    schema: &Value,
    payload: &Value,
) -> std::result::Result<(), ToolError> {
    let validator = JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(schema)
        .map_err(|err| {
            ToolError::Internal(format!(
                "failed to prepare parameter schema for `{tool}`: {err}"
            ))
        })?;

    if let Err(errors) = validator.validate(payload) {
        let mut details = Vec::new();
        let mut truncated = false;

        for (idx, error) in errors.enumerate() {
            if idx < MAX_SCHEMA_ERRORS {
                let mut path = error.instance_path.to_string();
                if path.is_empty() {
                    path = "<root>".to_string();
                }
                details.push(format!("{}: {}", path, error));
            } else {
                truncated = true;
                break;
            }
        }

        let mut detail_str = if details.is_empty() {
            "payload failed schema validation".to_string()
        } else {
            details.join("; ")
        };

        if truncated {
            detail_str.push_str("; additional errors truncated");
        }

        return Err(ToolError::Validation(format!(
            "Invalid parameters for `{tool}`: {detail_str}"
        )));
    }

    Ok(())
}
