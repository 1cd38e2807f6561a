use serde_json::{json, Value};

use crate::error::ToolError;

/// Outcome of a successful tool invocation
///
/// `Data` carries the upstream payload verbatim; `Empty` marks a call that
/// succeeded but has nothing to show, which callers must be able to tell
/// apart from a failure.
#[derive(Debug, Clone)]
pub enum ToolOutcome {
    /// Upstream payload, passed through without restructuring
    Data(Value),
    /// Successful call with no matches; the string explains what was searched
    Empty(String),
}

/// Wrap the final outcome of an invocation into the single tool response shape.
///
/// Exactly one of three shapes is produced: the upstream payload itself,
/// `{"info": ...}` for an informational empty result, or `{"error": ...}`.
pub fn format_response(result: crate::error::Result<ToolOutcome>) -> Value {
    match result {
        Ok(ToolOutcome::Data(payload)) => payload,
        Ok(ToolOutcome::Empty(message)) => json!({ "info": message }),
        Err(err) => err.to_error_payload(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_passes_through_verbatim() {
        let payload = json!({ "data": [{"id": "1"}], "meta": {"count": 1} });
        let response = format_response(Ok(ToolOutcome::Data(payload.clone())));
        assert_eq!(response, payload);
    }

    #[test]
    fn empty_uses_info_key() {
        let response = format_response(Ok(ToolOutcome::Empty("nothing to show".into())));
        assert_eq!(response, json!({ "info": "nothing to show" }));
    }

    #[test]
    fn error_uses_error_key() {
        let response = format_response(Err(ToolError::UpstreamNotFound(
            "No hotels found in city code: XXZZ".into(),
        )));
        assert_eq!(
            response,
            json!({ "error": "No hotels found in city code: XXZZ" })
        );
    }
}
