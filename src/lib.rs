//! Typed, order-preserving query string parameters.
//!
//! `quaere` reads and writes strongly-typed values at named keys of a
//! query string without losing unrelated keys, duplicate values, or the
//! original entry order, all of which a parse-to-struct round trip
//! destroys.
//!
//! ```
//! use quaere::{Integer, QueryParams};
//!
//! let params = QueryParams::parse("page=2&q=rust");
//! assert_eq!(params.get("page", &Integer), Some(2));
//!
//! let next = params.set("page", &Integer, Some(&3));
//! assert_eq!(next.to_query_string(), "page=3&q=rust");
//!
//! // the original snapshot is untouched
//! assert_eq!(params.get("page", &Integer), Some(2));
//! ```

// Internal modules (not public API)
mod datatype;
mod encoding;
mod error;
mod query_params;
mod schema;
mod search_params;

// Public API
pub use datatype::{
    AnyDatatype, Datatype, Flag, Integer, Multiple, Number, OneOf, Pattern, Required, Text,
};
pub use error::{ParseError, ParseResult, ValidationError};
pub use query_params::QueryParams;
pub use schema::Schema;
pub use search_params::SearchParams;
