//! The closed set of JSON values.
//!
//! Integers and floats are separate variants. Which one a number becomes is
//! decided once, by the deserializer or by the caller constructing the value,
//! and nothing converts between them implicitly. [`coerce_to_double`] is the
//! single place where an `Int` is allowed to stand in for a `Float`.

use crate::compound::Compound;
use crate::error::{JsonError, Result, SchemaError};
use crate::list::List;

/// A JSON value: one of exactly seven variants.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Compound(Compound),
    List(List),
}

impl Value {
    /// Human-readable variant name, used in schema error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Compound(_) => "compound",
            Value::List(_) => "list",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check that this value can be stored in a container.
    ///
    /// NaN and the infinities have no JSON spelling, so a `Float` holding one
    /// is rejected with [`JsonError::InvalidEntryType`]. Nested containers are
    /// not revisited: they were validated entry by entry as they were built.
    pub fn validate(&self) -> Result<()> {
        match self {
            Value::Float(f) if !f.is_finite() => Err(JsonError::InvalidEntryType(format!(
                "non-finite float {f}"
            ))),
            _ => Ok(()),
        }
    }

    /// See [`coerce_to_double`].
    pub fn to_double(&self) -> Result<f64> {
        coerce_to_double(self)
    }
}

/// Read a numeric value as `f64`, accepting both `Int` and `Float`.
///
/// Any other variant fails with [`SchemaError::NotDecimal`].
pub fn coerce_to_double(value: &Value) -> Result<f64> {
    match value {
        Value::Float(f) => Ok(*f),
        Value::Int(i) => Ok(*i as f64),
        other => Err(SchemaError::NotDecimal {
            found: other.type_name(),
        }
        .into()),
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<Compound> for Value {
    fn from(c: Compound) -> Self {
        Value::Compound(c)
    }
}

impl From<List> for Value {
    fn from(l: List) -> Self {
        Value::List(l)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}
