use serde::Deserialize;
use serde_json::Value;

/// Error envelope the API puts in a response body, e.g. `{"error": "Employee not found"}`.
///
/// Both 2xx and non-2xx responses may carry it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<Value>,
}

impl ErrorBody {
    /// The error text, if the field holds something non-blank.
    pub fn message(&self) -> Option<String> {
        let text = match self.error.as_ref()? {
            Value::Null => return None,
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        (!text.trim().is_empty()).then_some(text)
    }

    /// Extracts the error text from an arbitrary JSON body; only objects qualify.
    pub fn from_value(value: &Value) -> Option<String> {
        if !value.is_object() {
            return None;
        }
        ErrorBody::deserialize(value).ok()?.message()
    }
}
