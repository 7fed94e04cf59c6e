//! Bridges to the serde ecosystem.
//!
//! [`Value`], [`Compound`] and [`List`] implement `serde::Serialize`, so a tree
//! can be written by any serde format. Conversions to and from
//! `serde_json::Value` let documents move between this crate and code built
//! on `serde_json`.

use crate::compound::Compound;
use crate::error::{JsonError, Result};
use crate::list::List;
use crate::value::Value;
use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde::Serialize;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Str(s) => serializer.serialize_str(s),
            Value::Compound(c) => c.serialize(serializer),
            Value::List(l) => l.serialize(serializer),
        }
    }
}

impl Serialize for Compound {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for List {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self.iter() {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

/// Numbers that fit `i64` become `Int`; every other number becomes `Float`,
/// matching how the deserializer classifies number tokens.
impl TryFrom<serde_json::Value> for Value {
    type Error = JsonError;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        Ok(match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => Value::Int(i),
                (None, Some(f)) => Value::Float(f),
                (None, None) => {
                    return Err(JsonError::InvalidEntryType(format!(
                        "number {n} is not representable"
                    )))
                }
            },
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                let mut list = List::new();
                for item in items {
                    list.add(Value::try_from(item)?)?;
                }
                Value::List(list)
            }
            serde_json::Value::Object(map) => {
                let mut compound = Compound::new();
                for (key, item) in map {
                    compound.add(key, Value::try_from(item)?)?;
                }
                Value::Compound(compound)
            }
        })
    }
}

/// Containers only hold finite floats; a bare non-finite `Float` maps to
/// `null`, as `serde_json` does.
impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Int(i) => serde_json::Value::Number(i.into()),
            Value::Float(f) => serde_json::Number::from_f64(f)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Value::Str(s) => serde_json::Value::String(s),
            Value::List(list) => serde_json::Value::Array(
                list.iter().cloned().map(serde_json::Value::from).collect(),
            ),
            Value::Compound(compound) => serde_json::Value::Object(
                compound
                    .iter()
                    .map(|(k, v)| (k.to_string(), serde_json::Value::from(v.clone())))
                    .collect(),
            ),
        }
    }
}
