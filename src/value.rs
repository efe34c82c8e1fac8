//! Stored translation values.
//!
//! Tables are plain JSON, so a key may map to any JSON value. Values are
//! kept as a tagged variant so that text-only transforms can reject the
//! shapes they do not apply to instead of guessing a coercion.

use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum TranslationValue {
    Null,
    Boolean(bool),
    Integer(i64),
    /// Integers above `i64::MAX`, kept exact.
    Unsigned(u64),
    Float(f64),
    String(String),
    List(Vec<TranslationValue>),
    /// Entries in source order.
    Map(Vec<(String, TranslationValue)>),
}

impl TranslationValue {
    /// Runtime type name used in diagnostics and `dump` output.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Integer(_) | Self::Unsigned(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Length reported by `dump`.
    ///
    /// Strings count Unicode scalar values, collections count elements, and
    /// other scalars count the scalar values of their textual form.
    pub fn len(&self) -> usize {
        match self {
            Self::String(s) => s.chars().count(),
            Self::List(items) => items.len(),
            Self::Map(entries) => entries.len(),
            _ => self.to_text().chars().count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Textual form returned when no modifier applies.
    ///
    /// Collections render as compact JSON; null renders as the empty string.
    pub fn to_text(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Boolean(b) => b.to_string(),
            Self::Integer(i) => i.to_string(),
            Self::Unsigned(u) => u.to_string(),
            Self::String(s) => s.clone(),
            Self::Float(_) | Self::List(_) | Self::Map(_) => self.to_json().to_string(),
        }
    }

    /// JSON literal for this value, pretty-printed for collections.
    ///
    /// Parsing the literal back yields an equal value.
    pub fn to_literal(&self) -> String {
        format!("{:#}", self.to_json())
    }

    /// `type(length) => literal` rendering.
    pub fn dump(&self) -> String {
        format!("{}({}) => {}", self.type_name(), self.len(), self.to_literal())
    }

    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Boolean(b) => Value::Bool(*b),
            Self::Integer(i) => Value::from(*i),
            Self::Unsigned(u) => Value::from(*u),
            Self::Float(f) => Value::from(*f),
            Self::String(s) => Value::String(s.clone()),
            Self::List(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            Self::Map(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect::<Map<String, Value>>(),
            ),
        }
    }
}

impl From<&Value> for TranslationValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Boolean(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    Self::Unsigned(u)
                } else {
                    Self::Float(n.as_f64().unwrap_or_default())
                }
            }
            Value::String(s) => Self::String(s.clone()),
            Value::Array(items) => Self::List(items.iter().map(Self::from).collect()),
            Value::Object(map) => Self::Map(
                map.iter()
                    .map(|(key, value)| (key.clone(), Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for TranslationValue {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}

impl From<&str> for TranslationValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

/// Type name for a raw JSON document, matching [`TranslationValue::type_name`].
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "map",
    }
}
