//! The value model shared by literal tokens and computed results.

use crate::error::ExprError;
use serde_json::Value as Json;
use std::fmt;

/// A literal or computed value.
///
/// `Regex` holds pattern text with any literal flags already folded into an
/// inline `(?flags)` group. `Placeholder` holds the raw identifier of a value
/// the caller has not resolved yet.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Boolean(bool),
    String(String),
    List(Vec<Value>),
    Regex(String),
    Null,
    Placeholder(String),
}

impl Value {
    /// True if this value is, or contains, an unresolved placeholder.
    pub fn has_placeholder(&self) -> bool {
        self.first_placeholder().is_some()
    }

    /// Name of the first unresolved placeholder, searching lists depth-first.
    pub fn first_placeholder(&self) -> Option<&str> {
        match self {
            Value::Placeholder(name) => Some(name),
            Value::List(items) => items.iter().find_map(Value::first_placeholder),
            _ => None,
        }
    }

    /// Deep equality: lists compare element-wise and order-sensitively,
    /// values of different types are never equal.
    pub fn deep_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::List(a), Value::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.deep_equals(y))
            }
            _ => self == other,
        }
    }

    /// Converts a JSON document into a value.
    ///
    /// Objects have no counterpart and are rejected.
    pub fn from_json(json: &Json) -> Result<Value, ExprError> {
        Ok(match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Boolean(*b),
            Json::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Value::String(s.clone()),
            Json::Array(items) => Value::List(
                items
                    .iter()
                    .map(Value::from_json)
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            Json::Object(_) => {
                return Err(ExprError::resolver(
                    "JSON objects cannot be used as expression values",
                ))
            }
        })
    }

    /// Converts the value into JSON.
    ///
    /// NaN/Infinity become `null` (as `JSON.stringify` does), regexes become
    /// their pattern text and placeholders become `null`.
    pub fn to_json(&self) -> Json {
        match self {
            Value::Number(n) => serde_json::Number::from_f64(*n)
                .map(Json::Number)
                .unwrap_or(Json::Null),
            Value::Boolean(b) => Json::Bool(*b),
            Value::String(s) | Value::Regex(s) => Json::String(s.clone()),
            Value::List(items) => Json::Array(items.iter().map(Value::to_json).collect()),
            Value::Null | Value::Placeholder(_) => Json::Null,
        }
    }

    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{:?}", s),
            other => write!(f, "{}", other),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::String(s) => f.write_str(s),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt_nested(f)?;
                }
                f.write_str("]")
            }
            Value::Regex(pattern) => write!(f, "/{}/", pattern),
            Value::Null => f.write_str("null"),
            Value::Placeholder(name) => f.write_str(name),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}
