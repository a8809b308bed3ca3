use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder for any field the payload did not provide.
pub const UNKNOWN: &str = "unknown";

/// The provider's forecast document, kept as an untyped JSON tree.
///
/// Its shape is owned by the provider, so every lookup returns an `Option`.
#[derive(Debug, Clone, PartialEq)]
pub struct RawForecast(Value);

impl RawForecast {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Look up a node by JSON pointer, e.g. `/0/timeSeries/1/areas/0/pops/0`.
    pub fn at(&self, pointer: &str) -> Option<&Value> {
        self.0.pointer(pointer)
    }

    /// Scalar at `pointer` as display text (strings as-is, numbers in JSON form).
    pub fn text_at(&self, pointer: &str) -> Option<String> {
        self.at(pointer).and_then(scalar_text)
    }
}

pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Today's headline forecast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodaySummary {
    pub date: String,
    pub weather: String,
    pub temperature: String,
    pub precipitation: String,
}

/// One row of the three-day table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
    pub date: String,
    pub weather: String,
    pub max_temp: String,
    pub min_temp: String,
}
