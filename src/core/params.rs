use serde_json::{Map, Value};

/// Outgoing request parameters under construction
///
/// Builds the minimal payload forwarded upstream: only keys whose value is
/// actually present are inserted, so absent optional fields never appear in
/// the request. Numeric zero and boolean `false` are present values and are
/// forwarded; empty strings are treated as absent.
#[derive(Debug, Clone, Default)]
pub struct ParamMap {
    entries: Map<String, Value>,
}

impl ParamMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a required value
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> &mut Self {
        self.entries.insert(key.to_string(), value.into());
        self
    }

    /// Insert an optional value when present, including `Some(0)` and `Some(false)`
    pub fn set_opt(&mut self, key: &str, value: Option<impl Into<Value>>) -> &mut Self {
        if let Some(value) = value {
            self.entries.insert(key.to_string(), value.into());
        }
        self
    }

    /// Insert an optional string when present and non-empty
    pub fn set_opt_str(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            if !value.is_empty() {
                self.entries
                    .insert(key.to_string(), Value::String(value.to_string()));
            }
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// View as a JSON object
    pub fn as_value(&self) -> Value {
        Value::Object(self.entries.clone())
    }

    /// Flatten into (key, value) string pairs suitable for a query string
    ///
    /// Scalars serialize without surrounding quotes; non-scalar values fall
    /// back to their compact JSON encoding.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(key, value)| {
                let rendered = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (key.clone(), rendered)
            })
            .collect()
    }
}
