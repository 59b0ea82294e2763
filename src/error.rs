use thiserror::Error;

/// Expected validation failure returned by a datatype parse.
///
/// Malformed input is a first-class outcome: parse functions return this,
/// they never panic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result of one datatype parse
pub type ParseResult<T> = Result<T, ParseError>;

/// Structured failure raised by the throwing read path
/// ([`crate::QueryParams::try_get`] and [`crate::QueryParams::try_get_obj`]).
///
/// Carries enough context for a human-readable diagnostic and enough
/// structure for programmatic inspection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Failed to validate {} rule for property \"{}\" with values: {}. {}",
    .datatype,
    .property,
    .values.join(", "),
    .error
)]
pub struct ValidationError {
    /// Key the read targeted.
    pub property: String,
    /// Name of the datatype whose parse failed, e.g. `Integer`.
    pub datatype: String,
    /// Raw values that were stored under the key.
    pub values: Vec<String>,
    /// The underlying parse failure.
    pub error: ParseError,
}
