use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use strata_errors::{EncodeError, Error, ErrorKind};

/// A single argument value embedded into a query document.
///
/// The set of variants is closed: anything that is not a scalar or a
/// timestamp goes through [`Value::json`], which encodes arbitrary
/// serializable data up front. Once a `Value` exists, rendering its
/// literal form cannot fail.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// A UTC timestamp, rendered as double-quoted millisecond-precision
    /// RFC 3339 (`"2020-01-02T03:04:05.006Z"`).
    DateTime(DateTime<Utc>),
    /// An already-encoded document fragment, rendered verbatim as its
    /// JSON literal.
    Json(serde_json::Value),
}

impl Value {
    pub fn kind(&self) -> &'static str {
        use Value::*;
        match self {
            Null => "null",
            Bool(..) => "bool",
            Int(..) => "int",
            Float(..) => "float",
            Str(..) => "string",
            DateTime(..) => "datetime",
            Json(..) => "json",
        }
    }

    /// Encode arbitrary serializable data into the [`Value::Json`]
    /// variant.
    ///
    /// Data that has no JSON representation (e.g. a map with non-string
    /// keys) yields an [`EncodeError`]; that is a bug in the code
    /// assembling the query, not a runtime condition.
    pub fn json<T: Serialize + ?Sized>(data: &T) -> Result<Value, Error> {
        serde_json::to_value(data)
            .map(Value::Json)
            .map_err(EncodeError::with_source)
    }
}

impl fmt::Display for Value {
    /// Renders the literal byte representation used in query documents.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            // serde_json's rule: non-finite floats render as null
            Value::Float(v) => write!(f, "{}", serde_json::Value::from(*v)),
            Value::Str(v) => write!(f, "{}", serde_json::Value::from(v.as_str())),
            Value::DateTime(v) => {
                write!(f, "\"{}\"", v.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            Value::Json(v) => write!(f, "{}", v),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Value {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Value {
        Value::Int(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Value {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Value {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Value {
        Value::Str(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Value {
        Value::Str(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Value {
        Value::DateTime(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Value {
        Value::Json(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Value {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}
