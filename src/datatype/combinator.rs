use std::borrow::Cow;

use super::Datatype;
use crate::error::{ParseError, ParseResult};

/// Rejects the missing-value outcome of the wrapped datatype.
///
/// A parse error from the wrapped datatype passes through unchanged; only
/// a successful parse that yields nothing becomes a failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct Required<D> {
    inner: D,
}

impl<D> Required<D> {
    pub fn new(inner: D) -> Self {
        Self { inner }
    }
}

impl<D: Datatype> Datatype for Required<D> {
    type Item = D::Item;

    fn name(&self) -> Cow<'static, str> {
        Cow::Owned(format!("Required<{}>", self.inner.name()))
    }

    fn parse(&self, values: &[String]) -> ParseResult<Option<D::Item>> {
        match self.inner.parse(values)? {
            Some(item) => Ok(Some(item)),
            None => Err(ParseError::new("missing required value")),
        }
    }

    fn serialize(&self, value: Option<&D::Item>) -> Vec<String> {
        self.inner.serialize(value)
    }
}

/// Applies a single-value datatype independently to every raw value
/// stored under a key.
///
/// Fail-closed: one malformed element invalidates the whole list, with no
/// partial result.
#[derive(Debug, Clone, Copy, Default)]
pub struct Multiple<D> {
    inner: D,
}

impl<D> Multiple<D> {
    pub fn new(inner: D) -> Self {
        Self { inner }
    }
}

impl<D: Datatype> Datatype for Multiple<D> {
    type Item = Vec<D::Item>;

    fn name(&self) -> Cow<'static, str> {
        Cow::Owned(format!("Multiple<{}>", self.inner.name()))
    }

    fn parse(&self, values: &[String]) -> ParseResult<Option<Vec<D::Item>>> {
        if values.is_empty() {
            return Ok(None);
        }
        let mut items = Vec::with_capacity(values.len());
        for value in values {
            match self.inner.parse(std::slice::from_ref(value))? {
                Some(item) => items.push(item),
                None => {
                    return Err(ParseError::new(format!(
                        "\"{value}\" parsed as missing inside a multi-valued list"
                    )));
                }
            }
        }
        Ok(Some(items))
    }

    fn serialize(&self, value: Option<&Vec<D::Item>>) -> Vec<String> {
        value
            .map(|items| {
                items
                    .iter()
                    .flat_map(|item| self.inner.serialize(Some(item)))
                    .collect()
            })
            .unwrap_or_default()
    }
}
