//! JSON arrays: an ordered, index-addressable sequence of values.

use crate::accessor::{resolve, FromValue, Policy};
use crate::error::{EntryRef, JsonError, Result, SchemaError};
use crate::value::Value;
use std::ops::Index;

/// A JSON array.
///
/// Every insertion path (`add`, `insert`, `set`) runs the same validation as
/// [`Compound::add`](crate::Compound::add).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct List {
    items: Vec<Value>,
}

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` to the end of the list.
    pub fn add(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        value.validate()?;
        self.items.push(value);
        Ok(())
    }

    /// Insert `value` at `index`, shifting later elements right.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        value.validate()?;
        self.items.insert(index, value);
        Ok(())
    }

    /// Replace the element at `index`, returning the previous one.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn set(&mut self, index: usize, value: impl Into<Value>) -> Result<Value> {
        let value = value.into();
        value.validate()?;
        Ok(std::mem::replace(&mut self.items[index], value))
    }

    /// Remove the first element equal to `value`. Returns whether one was found.
    pub fn remove(&mut self, value: &Value) -> bool {
        match self.index_of(value) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove and return the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Value {
        self.items.remove(index)
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.items.contains(value)
    }

    pub fn index_of(&self, value: &Value) -> Option<usize> {
        self.items.iter().position(|item| item == value)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The raw value at `index`, if in range.
    pub fn value(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    // ------------------------------------------------------------------
    // Typed getters (see the `accessor` module for the policy table).
    // An out-of-range index counts as a missing entry.
    // ------------------------------------------------------------------

    pub fn get<'a, T: FromValue<'a>>(&'a self, index: usize) -> Option<T> {
        self.lookup(index, Policy::LENIENT).ok().flatten()
    }

    pub fn get_or_default<'a, T: FromValue<'a>>(&'a self, index: usize, default: T) -> T {
        self.get(index).unwrap_or(default)
    }

    pub fn get_verified<'a, T: FromValue<'a>>(&'a self, index: usize) -> Result<T> {
        self.lookup(index, Policy::REQUIRED)?.ok_or_else(|| {
            JsonError::from(SchemaError::Missing {
                entry: self.locate(index),
            })
        })
    }

    pub fn get_optional_verified<'a, T: FromValue<'a>>(&'a self, index: usize) -> Result<Option<T>> {
        self.lookup(index, Policy::OPTIONAL_VERIFIED)
    }

    pub fn get_verified_or_default<'a, T: FromValue<'a>>(&'a self, index: usize, default: T) -> Result<T> {
        Ok(self.get_optional_verified(index)?.unwrap_or(default))
    }

    fn lookup<'a, T: FromValue<'a>>(&'a self, index: usize, policy: Policy) -> Result<Option<T>> {
        resolve(self.items.get(index), policy, || self.locate(index))
    }

    fn locate(&self, index: usize) -> EntryRef {
        EntryRef::Index {
            index,
            len: self.items.len(),
        }
    }
}

impl TryFrom<Vec<Value>> for List {
    type Error = JsonError;

    fn try_from(items: Vec<Value>) -> Result<Self> {
        for item in &items {
            item.validate()?;
        }
        Ok(Self { items })
    }
}

impl Index<usize> for List {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.items[index]
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
