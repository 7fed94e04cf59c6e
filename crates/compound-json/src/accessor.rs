//! Typed entry access shared by [`Compound`] and [`List`].
//!
//! Every typed getter on the containers is one combination of two flags:
//!
//! | getter                    | verified | optional |
//! |---------------------------|----------|----------|
//! | `get`                     | no       | yes      |
//! | `get_or_default`          | no       | yes      |
//! | `get_verified`            | yes      | no       |
//! | `get_optional_verified`   | yes      | yes      |
//! | `get_verified_or_default` | yes      | yes      |
//!
//! *verified* decides whether a present entry of the wrong type is an error
//! or just "not found". *optional* decides whether a missing entry is an error
//! or just "not found". A stored `null` requested as a non-nullable type is a
//! [`SchemaError::Null`] only when the lookup is both verified and required;
//! everywhere else it reads as absent.

use crate::compound::Compound;
use crate::error::{EntryRef, Result, SchemaError};
use crate::list::List;
use crate::value::Value;

/// A type that can be extracted from a [`Value`] by the typed getters.
///
/// Extraction is exact: an `Int` is not an `f64` and a `Float` is not an
/// `i64`. Use [`coerce_to_double`](crate::coerce_to_double) to read either as
/// a double.
pub trait FromValue<'a>: Sized {
    /// Name reported as the expected type in schema errors.
    const TYPE_NAME: &'static str;

    /// Returns `None` when `value` holds a different variant.
    fn from_value(value: &'a Value) -> Option<Self>;
}

impl FromValue<'_> for bool {
    const TYPE_NAME: &'static str = "bool";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl FromValue<'_> for i64 {
    const TYPE_NAME: &'static str = "integer";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl FromValue<'_> for f64 {
    const TYPE_NAME: &'static str = "float";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl FromValue<'_> for String {
    const TYPE_NAME: &'static str = "string";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Str(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl<'a> FromValue<'a> for &'a str {
    const TYPE_NAME: &'static str = "string";

    fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl FromValue<'_> for Compound {
    const TYPE_NAME: &'static str = "compound";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Compound(c) => Some(c.clone()),
            _ => None,
        }
    }
}

impl<'a> FromValue<'a> for &'a Compound {
    const TYPE_NAME: &'static str = "compound";

    fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Compound(c) => Some(c),
            _ => None,
        }
    }
}

impl FromValue<'_> for List {
    const TYPE_NAME: &'static str = "list";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::List(l) => Some(l.clone()),
            _ => None,
        }
    }
}

impl<'a> FromValue<'a> for &'a List {
    const TYPE_NAME: &'static str = "list";

    fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::List(l) => Some(l),
            _ => None,
        }
    }
}

/// Any variant, `null` included.
impl FromValue<'_> for Value {
    const TYPE_NAME: &'static str = "value";

    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl<'a> FromValue<'a> for &'a Value {
    const TYPE_NAME: &'static str = "value";

    fn from_value(value: &'a Value) -> Option<Self> {
        Some(value)
    }
}

/// The nullable form of `T`: a stored `null` extracts as `Some(None)`.
impl<'a, T: FromValue<'a>> FromValue<'a> for Option<T> {
    const TYPE_NAME: &'static str = T::TYPE_NAME;

    fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Null => Some(None),
            other => T::from_value(other).map(Some),
        }
    }
}

/// The verified/optional pair selecting a getter's failure behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Policy {
    pub verified: bool,
    pub optional: bool,
}

impl Policy {
    pub const LENIENT: Policy = Policy {
        verified: false,
        optional: true,
    };
    pub const REQUIRED: Policy = Policy {
        verified: true,
        optional: false,
    };
    pub const OPTIONAL_VERIFIED: Policy = Policy {
        verified: true,
        optional: true,
    };
}

/// Apply `policy` to the outcome of a container lookup.
///
/// `entry` is `None` when the key or index is absent. `locate` is only called
/// when an error has to name the entry.
pub(crate) fn resolve<'a, T: FromValue<'a>>(
    entry: Option<&'a Value>,
    policy: Policy,
    locate: impl FnOnce() -> EntryRef,
) -> Result<Option<T>> {
    let Some(value) = entry else {
        if policy.verified && !policy.optional {
            return Err(SchemaError::Missing { entry: locate() }.into());
        }
        return Ok(None);
    };

    if let Some(extracted) = T::from_value(value) {
        return Ok(Some(extracted));
    }

    if !policy.verified {
        return Ok(None);
    }

    if value.is_null() {
        if policy.optional {
            return Ok(None);
        }
        return Err(SchemaError::Null {
            entry: locate(),
            expected: T::TYPE_NAME,
        }
        .into());
    }

    Err(SchemaError::WrongType {
        entry: locate(),
        expected: T::TYPE_NAME,
        found: value.type_name(),
    }
    .into())
}
