mod combinator;
mod leaf;

pub use combinator::{Multiple, Required};
pub use leaf::{Flag, Integer, Number, OneOf, Pattern, Text};

use std::borrow::Cow;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ParseError, ParseResult};

/// A named, stateless pair of pure conversion functions between the raw
/// string values stored under one query key and a typed value.
///
/// Datatypes are shared, immutable descriptors: a single instance can be
/// referenced by any number of call sites.
pub trait Datatype {
    /// The logical value type this datatype produces and consumes.
    type Item;

    /// Name used in validation failure messages, e.g. `Integer`.
    fn name(&self) -> Cow<'static, str>;

    /// Convert the complete ordered raw-value list currently stored under
    /// one key (possibly empty, possibly longer than one).
    ///
    /// `Ok(None)` means the values represent absence, typically an empty
    /// list. Malformed input is an expected outcome and comes back as
    /// `Err`; a parse must never panic.
    ///
    /// Single-valued datatypes consume at most the first raw value and
    /// ignore extras, so duplicate keys resolve first-wins.
    fn parse(&self, values: &[String]) -> ParseResult<Option<Self::Item>>;

    /// The ordered raw strings to store under a key to represent `value`.
    ///
    /// An empty vector means "no entries for this key", and
    /// `serialize(None)` is always empty.
    ///
    /// Contract (not enforced): for any `v` with `parse(raw)` returning
    /// `Ok(Some(v))`, parsing `serialize(Some(&v))` succeeds and yields a
    /// value that serializes back to the same raw list. Lossy datatypes
    /// may bend this; callers needing exact round trips must pick
    /// datatypes that keep it.
    fn serialize(&self, value: Option<&Self::Item>) -> Vec<String>;
}

/// Object-safe view of a [`Datatype`], used by [`crate::Schema`] to mix
/// datatypes with different item types in one collection.
///
/// Blanket-implemented for every datatype whose item type converts to and
/// from [`serde_json::Value`].
pub trait AnyDatatype {
    /// See [`Datatype::name`].
    fn type_name(&self) -> Cow<'static, str>;

    /// Parse to a dynamic value. The missing-value outcome is `Null`.
    fn parse_value(&self, values: &[String]) -> ParseResult<Value>;

    /// Serialize a dynamic value. `Null` serializes to no entries; a
    /// value that does not convert to the item type is an error.
    fn serialize_value(&self, value: &Value) -> ParseResult<Vec<String>>;
}

impl<D> AnyDatatype for D
where
    D: Datatype,
    D::Item: Serialize + DeserializeOwned,
{
    fn type_name(&self) -> Cow<'static, str> {
        self.name()
    }

    fn parse_value(&self, values: &[String]) -> ParseResult<Value> {
        match self.parse(values)? {
            Some(item) => serde_json::to_value(item).map_err(|e| ParseError::new(e.to_string())),
            None => Ok(Value::Null),
        }
    }

    fn serialize_value(&self, value: &Value) -> ParseResult<Vec<String>> {
        if value.is_null() {
            return Ok(self.serialize(None));
        }
        let item: D::Item = serde_json::from_value(value.clone())
            .map_err(|e| ParseError::new(e.to_string()))?;
        Ok(self.serialize(Some(&item)))
    }
}
