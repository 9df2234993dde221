//! # subobject
//!
//! Select nested fields out of JSON values with compact patterns.
//!
//! A pattern such as `{id, author: {name}}` is compiled once into a
//! [`CompiledFilter`] and can then be applied to any number of values,
//! from any number of threads. Arrays are filtered element by element and
//! keys missing from the input are simply left out.
//!
//! ```rust
//! use serde_json::json;
//!
//! let filter = subobject::subobject("{foo: {bar}}")?;
//!
//! assert_eq!(
//!     filter.apply(&json!({"foo": [{"bar": 1, "baz": 2}, {"bar": 3}], "qux": 4})),
//!     json!({"foo": [{"bar": 1}, {"bar": 3}]})
//! );
//! # Ok::<(), subobject::ParsingError>(())
//! ```
//!
//! Invalid patterns are reported with the exact span of the offending text:
//!
//! ```rust
//! let error = subobject::subobject("{foo} bar").unwrap_err();
//!
//! assert_eq!((error.position(), error.length()), (6, 3));
//! assert_eq!(
//!     error.to_string(),
//!     "ParsingError: Unexpected text after end of object (position: 6, length: 3)"
//! );
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

pub use builder::{Subobject, SubobjectBuilder, SubobjectError};

// Re-export important types from the engine package
pub use serde_json::Value;
pub use subobject_engine::{
    CompiledFilter, ConfigurationError, DEFAULT_MAX_DEPTH, ErrorKind, Expectation, ParserConfig,
    ParsingError, Selector, Span,
};

/// Compile `pattern` into a reusable filter
///
/// # Errors
///
/// Returns a `ParsingError` carrying `pattern` and the span of the first
/// problem found in it.
#[inline]
pub fn subobject(pattern: &str) -> Result<CompiledFilter, ParsingError> {
    subobject_engine::compile(pattern)
}
