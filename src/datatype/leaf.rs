use std::borrow::Cow;

use regex::Regex;

use super::Datatype;
use crate::error::{ParseError, ParseResult};

/// Passes the first raw value through verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct Text;

impl Datatype for Text {
    type Item = String;

    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("Text")
    }

    fn parse(&self, values: &[String]) -> ParseResult<Option<String>> {
        Ok(values.first().cloned())
    }

    fn serialize(&self, value: Option<&String>) -> Vec<String> {
        value.map(|v| vec![v.clone()]).unwrap_or_default()
    }
}

/// Signed 64-bit integer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Integer;

impl Datatype for Integer {
    type Item = i64;

    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("Integer")
    }

    fn parse(&self, values: &[String]) -> ParseResult<Option<i64>> {
        match values.first() {
            None => Ok(None),
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|_| ParseError::new(format!("\"{raw}\" is not a valid integer"))),
        }
    }

    fn serialize(&self, value: Option<&i64>) -> Vec<String> {
        value.map(|v| vec![v.to_string()]).unwrap_or_default()
    }
}

/// 64-bit floating point number.
#[derive(Debug, Clone, Copy, Default)]
pub struct Number;

impl Datatype for Number {
    type Item = f64;

    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("Number")
    }

    fn parse(&self, values: &[String]) -> ParseResult<Option<f64>> {
        match values.first() {
            None => Ok(None),
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|_| ParseError::new(format!("\"{raw}\" is not a valid number"))),
        }
    }

    fn serialize(&self, value: Option<&f64>) -> Vec<String> {
        value.map(|v| vec![v.to_string()]).unwrap_or_default()
    }
}

/// Presence datatype: the key being present at all means `true`.
///
/// An absent key parses to `Some(false)`, not to the missing-value
/// outcome. `true` serializes to a single empty raw value (`flag=`),
/// `false` to no entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct Flag;

impl Datatype for Flag {
    type Item = bool;

    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("Flag")
    }

    fn parse(&self, values: &[String]) -> ParseResult<Option<bool>> {
        Ok(Some(!values.is_empty()))
    }

    fn serialize(&self, value: Option<&bool>) -> Vec<String> {
        if value.is_some_and(|v| *v) {
            vec![String::new()]
        } else {
            Vec::new()
        }
    }
}

/// Accepts only values from a fixed set.
#[derive(Debug, Clone)]
pub struct OneOf {
    options: Vec<String>,
}

impl OneOf {
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }
}

impl Datatype for OneOf {
    type Item = String;

    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("OneOf")
    }

    fn parse(&self, values: &[String]) -> ParseResult<Option<String>> {
        match values.first() {
            None => Ok(None),
            Some(raw) if self.options.iter().any(|option| option == raw) => Ok(Some(raw.clone())),
            Some(raw) => Err(ParseError::new(format!(
                "\"{raw}\" is not one of: {}",
                self.options.join(", ")
            ))),
        }
    }

    fn serialize(&self, value: Option<&String>) -> Vec<String> {
        value.map(|v| vec![v.clone()]).unwrap_or_default()
    }
}

/// Accepts only values matching a regular expression.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }
}

impl Datatype for Pattern {
    type Item = String;

    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("Pattern")
    }

    fn parse(&self, values: &[String]) -> ParseResult<Option<String>> {
        match values.first() {
            None => Ok(None),
            Some(raw) if self.regex.is_match(raw) => Ok(Some(raw.clone())),
            Some(raw) => Err(ParseError::new(format!(
                "\"{raw}\" does not match /{}/",
                self.regex.as_str()
            ))),
        }
    }

    fn serialize(&self, value: Option<&String>) -> Vec<String> {
        value.map(|v| vec![v.clone()]).unwrap_or_default()
    }
}
