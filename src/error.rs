use thiserror::Error;

/// Caller-facing error taxonomy for tool invocations
///
/// Every failure raised anywhere in an invocation is classified into exactly
/// one of these kinds before it reaches the caller.
#[derive(Error, Debug)]
pub enum ToolError {
    /// A business-rule violation caught before any network call
    #[error("{0}")]
    Validation(String),

    /// The upstream signaled "no such resource" for a lookup
    #[error("{0}")]
    UpstreamNotFound(String),

    /// Any other structured upstream failure
    #[error("Amadeus API error ({status}): {detail}")]
    UpstreamApi { status: u16, detail: String },

    /// Unanticipated failure: transport, malformed response, programming error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ToolError>;

impl ToolError {
    /// Stable classification code for this error kind
    pub fn kind(&self) -> &'static str {
        match self {
            ToolError::Validation(_) => "validation_error",
            ToolError::UpstreamNotFound(_) => "upstream_not_found",
            ToolError::UpstreamApi { .. } => "upstream_api_error",
            ToolError::Internal(_) => "internal_error",
        }
    }

    /// Whether this is an expected, recoverable outcome of normal operation
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ToolError::Validation(_) | ToolError::UpstreamNotFound(_)
        )
    }

    /// Convert to the failure half of the tool response shape
    pub fn to_error_payload(&self) -> serde_json::Value {
        serde_json::json!({ "error": self.to_string() })
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(err: serde_json::Error) -> Self {
        ToolError::Internal(format!("serialization failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_stable() {
        assert_eq!(
            ToolError::Validation("bad".into()).kind(),
            "validation_error"
        );
        assert_eq!(
            ToolError::UpstreamNotFound("gone".into()).kind(),
            "upstream_not_found"
        );
        assert_eq!(
            ToolError::UpstreamApi {
                status: 500,
                detail: "boom".into()
            }
            .kind(),
            "upstream_api_error"
        );
        assert_eq!(ToolError::Internal("oops".into()).kind(), "internal_error");
    }

    #[test]
    fn recoverable_split() {
        assert!(ToolError::Validation("x".into()).is_recoverable());
        assert!(ToolError::UpstreamNotFound("x".into()).is_recoverable());
        assert!(!ToolError::Internal("x".into()).is_recoverable());
        assert!(!ToolError::UpstreamApi {
            status: 400,
            detail: "x".into()
        }
        .is_recoverable());
    }

    #[test]
    fn error_payload_shape() {
        let payload = ToolError::Validation("Number of adults must be between 1 and 9".into())
            .to_error_payload();
        assert_eq!(payload["error"], "Number of adults must be between 1 and 9");
        assert!(payload.get("info").is_none());
    }
}
