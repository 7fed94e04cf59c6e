//! JSON objects: string keys mapped to values in insertion order.

use crate::accessor::{resolve, FromValue, Policy};
use crate::error::{EntryRef, JsonError, Result, SchemaError};
use crate::value::Value;
use indexmap::IndexMap;
use std::ops::Index;

/// A JSON object.
///
/// Keys are unique. Adding an existing key replaces its value in place (last
/// write wins) and keeps the key's original position in iteration order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Compound {
    entries: IndexMap<String, Value>,
}

impl Compound {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `key`, replacing any previous entry.
    ///
    /// Fails with [`JsonError::InvalidEntryType`](crate::JsonError::InvalidEntryType)
    /// if the value has no JSON representation (a non-finite float).
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        value.validate()?;
        self.entries.insert(key.into(), value);
        Ok(())
    }

    /// Remove the entry under `key`. Returns whether it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        self.entries.shift_remove(key).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The raw value stored under `key`, if any.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    // ------------------------------------------------------------------
    // Typed getters (see the `accessor` module for the policy table)
    // ------------------------------------------------------------------

    /// Unverified, optional: `None` when the key is missing or holds another type.
    pub fn get<'a, T: FromValue<'a>>(&'a self, key: &str) -> Option<T> {
        self.lookup(key, Policy::LENIENT).ok().flatten()
    }

    /// Like [`get`](Self::get), falling back to `default`.
    pub fn get_or_default<'a, T: FromValue<'a>>(&'a self, key: &str, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    /// Verified, required: the entry must exist and hold a `T`.
    pub fn get_verified<'a, T: FromValue<'a>>(&'a self, key: &str) -> Result<T> {
        self.lookup(key, Policy::REQUIRED)?.ok_or_else(|| {
            JsonError::from(SchemaError::Missing {
                entry: EntryRef::Key(key.to_string()),
            })
        })
    }

    /// Verified, optional: a missing (or null) entry is `Ok(None)`, a present
    /// entry of another type is an error.
    pub fn get_optional_verified<'a, T: FromValue<'a>>(&'a self, key: &str) -> Result<Option<T>> {
        self.lookup(key, Policy::OPTIONAL_VERIFIED)
    }

    /// Like [`get_optional_verified`](Self::get_optional_verified), falling
    /// back to `default` when the entry is missing.
    pub fn get_verified_or_default<'a, T: FromValue<'a>>(&'a self, key: &str, default: T) -> Result<T> {
        Ok(self.get_optional_verified(key)?.unwrap_or(default))
    }

    fn lookup<'a, T: FromValue<'a>>(&'a self, key: &str, policy: Policy) -> Result<Option<T>> {
        resolve(self.entries.get(key), policy, || EntryRef::Key(key.to_string()))
    }
}

/// Panics if `key` is missing; use [`Compound::value`] for a fallible read.
impl Index<&str> for Compound {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        match self.entries.get(key) {
            Some(value) => value,
            None => panic!("compound has no entry \"{key}\""),
        }
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
