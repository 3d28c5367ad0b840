use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A value carried in a calculation request or result payload.
///
/// The representation is untagged so that requests and responses serialize to
/// plain JSON: `10` round-trips as `Integer`, `10.5` as `Float`, and so on.
/// Variant order matters for deserialization — `Integer` is tried before
/// `Float` so that whole numbers keep their integral identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ToolValue {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// String value
    String(String),
    /// Array of `ToolValue`s
    Array(Vec<ToolValue>),
    /// Object/map of string keys to `ToolValue`s
    Object(HashMap<String, ToolValue>),
}

impl ToolValue {
    /// Numeric view over `Integer` and `Float`; `None` for anything else.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ToolValue::Integer(i) => Some(*i as f64),
            ToolValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Boolean view.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ToolValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// String view.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ToolValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Array view.
    pub fn as_array(&self) -> Option<&[ToolValue]> {
        match self {
            ToolValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Object view.
    pub fn as_object(&self) -> Option<&HashMap<String, ToolValue>> {
        match self {
            ToolValue::Object(fields) => Some(fields),
            _ => None,
        }
    }

    /// Whether this value is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, ToolValue::Null)
    }

    /// Type name used in fault messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            ToolValue::Null => "null",
            ToolValue::Bool(_) => "boolean",
            ToolValue::Integer(_) => "integer",
            ToolValue::Float(_) => "float",
            ToolValue::String(_) => "string",
            ToolValue::Array(_) => "array",
            ToolValue::Object(_) => "object",
        }
    }
}

impl fmt::Display for ToolValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolValue::Null => write!(f, "null"),
            ToolValue::Bool(b) => write!(f, "{b}"),
            ToolValue::Integer(i) => write!(f, "{i}"),
            ToolValue::Float(fl) => write!(f, "{fl}"),
            ToolValue::String(s) => write!(f, "\"{s}\""),
            ToolValue::Array(items) => {
                let rendered: Vec<String> = items.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", rendered.join(", "))
            }
            ToolValue::Object(fields) => {
                let mut pairs: Vec<String> =
                    fields.iter().map(|(k, v)| format!("\"{k}\": {v}")).collect();
                pairs.sort();
                write!(f, "{{{}}}", pairs.join(", "))
            }
        }
    }
}

impl From<bool> for ToolValue {
    fn from(value: bool) -> Self {
        ToolValue::Bool(value)
    }
}

impl From<i64> for ToolValue {
    fn from(value: i64) -> Self {
        ToolValue::Integer(value)
    }
}

impl From<f64> for ToolValue {
    fn from(value: f64) -> Self {
        ToolValue::Float(value)
    }
}

impl From<&str> for ToolValue {
    fn from(value: &str) -> Self {
        ToolValue::String(value.to_string())
    }
}

impl From<String> for ToolValue {
    fn from(value: String) -> Self {
        ToolValue::String(value)
    }
}

impl From<Vec<f64>> for ToolValue {
    fn from(values: Vec<f64>) -> Self {
        ToolValue::Array(values.into_iter().map(ToolValue::Float).collect())
    }
}

impl From<serde_json::Value> for ToolValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => ToolValue::Null,
            serde_json::Value::Bool(b) => ToolValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    ToolValue::Integer(i)
                } else {
                    ToolValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => ToolValue::String(s),
            serde_json::Value::Array(items) => {
                ToolValue::Array(items.into_iter().map(ToolValue::from).collect())
            }
            serde_json::Value::Object(fields) => {
                ToolValue::Object(fields.into_iter().map(|(k, v)| (k, ToolValue::from(v))).collect())
            }
        }
    }
}

impl From<ToolValue> for serde_json::Value {
    fn from(value: ToolValue) -> Self {
        match value {
            ToolValue::Null => serde_json::Value::Null,
            ToolValue::Bool(b) => serde_json::Value::Bool(b),
            ToolValue::Integer(i) => serde_json::Value::from(i),
            ToolValue::Float(f) => serde_json::Value::from(f),
            ToolValue::String(s) => serde_json::Value::String(s),
            ToolValue::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(serde_json::Value::from).collect())
            }
            ToolValue::Object(fields) => serde_json::Value::Object(
                fields.into_iter().map(|(k, v)| (k, serde_json::Value::from(v))).collect(),
            ),
        }
    }
}

/// Declarative argument signature for one tool field.
///
/// Handlers expose a static slice of these so that an external transport can
/// enumerate and register the tools without invoking them.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Wire name of the field.
    pub name: &'static str,
    /// Expected value type.
    pub field_type: FieldType,
    /// Whether the field must be present in a request.
    pub required: bool,
}

/// Value type expected by a tool field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Integer or floating point number
    Number,
    /// String value
    String,
    /// Boolean value
    Boolean,
    /// Array of numbers
    NumberArray,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldType::Number => "number",
            FieldType::String => "string",
            FieldType::Boolean => "boolean",
            FieldType::NumberArray => "array of numbers",
        };
        write!(f, "{name}")
    }
}
