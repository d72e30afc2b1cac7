// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Tuple results and their adaptation to the declared return type.
//!
//! A projection query returns [`Tuple`]s: ordered alias/value pairs. The
//! [`TupleConverter`] unwraps single-column tuples whose value fits the
//! declared [`ReturnedType`] and exposes every other tuple as a read-only
//! [`TupleBackedMap`].
//!
//! | Tuple | Value fits / null | Result |
//! |-------|-------------------|--------|
//! | one element | yes | the value |
//! | one element | no | map |
//! | several elements | any | map |
//! | not a tuple | any | unchanged |

use std::sync::Arc;

use serde::{Serialize, ser::SerializeMap};
use serde_json::Value;

use crate::error::{Error, Result};

const UNMODIFIABLE_MESSAGE: &str = "A TupleBackedMap cannot be modified.";

/// One result row as ordered alias/value pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tuple {
    elements: Vec<(String, Value)>
}

impl Tuple {
    /// Empty tuple.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element.
    #[must_use]
    pub fn with(mut self, alias: impl Into<String>, value: impl Into<Value>) -> Self {
        self.elements.push((alias.into(), value.into()));
        self
    }

    /// Value by alias.
    #[must_use]
    pub fn get(&self, alias: &str) -> Option<&Value> {
        self.elements
            .iter()
            .find(|(a, _)| a == alias)
            .map(|(_, value)| value)
    }

    /// Elements in column order.
    #[must_use]
    pub fn elements(&self) -> &[(String, Value)] {
        &self.elements
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the tuple has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<A: Into<String>, V: Into<Value>> FromIterator<(A, V)> for Tuple {
    fn from_iter<T: IntoIterator<Item = (A, V)>>(iter: T) -> Self {
        Self {
            elements: iter
                .into_iter()
                .map(|(alias, value)| (alias.into(), value.into()))
                .collect()
        }
    }
}

/// Declared return type of a query method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReturnedType {
    /// Accepts any value.
    #[default]
    Any,
    /// Boolean.
    Bool,
    /// Integer number.
    Integer,
    /// Any number.
    Number,
    /// Text.
    String,
    /// List.
    Array,
    /// Entity, projection or map.
    Object
}

impl ReturnedType {
    /// Whether `value` can be returned as this type.
    #[must_use]
    pub fn is_instance(self, value: &Value) -> bool {
        match self {
            Self::Any => true,
            Self::Bool => value.is_boolean(),
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Number => value.is_number(),
            Self::String => value.is_string(),
            Self::Array => value.is_array(),
            Self::Object => value.is_object()
        }
    }
}

/// Read-only map view over a [`Tuple`].
///
/// Keys, values and entries are read from the tuple on every call. Mutating
/// methods exist for parity with map APIs and always fail.
#[derive(Debug, Clone, PartialEq)]
pub struct TupleBackedMap {
    tuple: Arc<Tuple>
}

impl TupleBackedMap {
    /// Wrap `tuple`.
    pub fn new(tuple: impl Into<Arc<Tuple>>) -> Self {
        Self {
            tuple: tuple.into()
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tuple.len()
    }

    /// Whether the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tuple.is_empty()
    }

    /// Whether `key` is an alias of the tuple.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.tuple.get(key).is_some()
    }

    /// Whether any element holds `value`.
    #[must_use]
    pub fn contains_value(&self, value: &Value) -> bool {
        self.tuple.elements().iter().any(|(_, v)| v == value)
    }

    /// Value by alias.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.tuple.get(key)
    }

    /// Aliases in column order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.tuple.elements().iter().map(|(alias, _)| alias.as_str())
    }

    /// Values in column order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.tuple.elements().iter().map(|(_, value)| value)
    }

    /// Alias/value pairs in column order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.tuple
            .elements()
            .iter()
            .map(|(alias, value)| (alias.as_str(), value))
    }

    /// Always fails.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsupported`].
    pub fn insert(&mut self, _key: impl Into<String>, _value: Value) -> Result<Option<Value>> {
        Err(unmodifiable())
    }

    /// Always fails.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsupported`].
    pub fn remove(&mut self, _key: &str) -> Result<Option<Value>> {
        Err(unmodifiable())
    }

    /// Always fails.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsupported`].
    pub fn extend<I: IntoIterator<Item = (String, Value)>>(&mut self, _entries: I) -> Result<()> {
        Err(unmodifiable())
    }

    /// Always fails.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsupported`].
    pub fn clear(&mut self) -> Result<()> {
        Err(unmodifiable())
    }
}

fn unmodifiable() -> Error {
    Error::Unsupported {
        message: UNMODIFIABLE_MESSAGE
    }
}

impl Serialize for TupleBackedMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (alias, value) in self.entries() {
            map.serialize_entry(alias, value)?;
        }
        map.end()
    }
}

/// Raw or converted result of a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultValue {
    /// Plain value, `Null` for no row.
    Value(Value),
    /// Projection row.
    Tuple(Tuple),
    /// Row exposed as a map.
    Map(TupleBackedMap),
    /// Several rows.
    List(Vec<ResultValue>)
}

impl ResultValue {
    /// Plain value, if this is one.
    #[must_use]
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            _ => None
        }
    }

    /// Map view, if this is one.
    #[must_use]
    pub fn as_map(&self) -> Option<&TupleBackedMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None
        }
    }
}

impl From<Value> for ResultValue {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<Tuple> for ResultValue {
    fn from(tuple: Tuple) -> Self {
        Self::Tuple(tuple)
    }
}

/// Adapts tuple rows to the declared return type.
#[derive(Debug, Clone, Copy)]
pub struct TupleConverter {
    returned_type: ReturnedType
}

impl TupleConverter {
    /// Converter for methods declared to return `returned_type`.
    #[must_use]
    pub fn new(returned_type: ReturnedType) -> Self {
        Self {
            returned_type
        }
    }

    /// Convert one result; lists are converted element-wise.
    #[must_use]
    pub fn convert(&self, source: ResultValue) -> ResultValue {
        match source {
            ResultValue::Tuple(tuple) => self.convert_tuple(tuple),
            ResultValue::List(items) => {
                ResultValue::List(items.into_iter().map(|item| self.convert(item)).collect())
            }
            other => other
        }
    }

    fn convert_tuple(&self, tuple: Tuple) -> ResultValue {
        if let [(_, value)] = tuple.elements()
            && (value.is_null() || self.returned_type.is_instance(value))
        {
            return ResultValue::Value(value.clone());
        }
        ResultValue::Map(TupleBackedMap::new(tuple))
    }
}
