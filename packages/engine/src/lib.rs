//! # subobject engine
//!
//! Compiles compact field-selection patterns such as `{id, author: {name}}`
//! into reusable selector trees, and applies them to `serde_json::Value`s to
//! produce copies holding only the selected fields.
//!
//! ## Pipeline
//!
//! - **Tokenizer** ([`tokenizer`]): pattern text to span-carrying tokens
//! - **Selector tree builder** ([`selector_tree`]): recursive descent over
//!   tokens, with duplicate-key and grammar validation
//! - **Projection** ([`projection`]): selector tree plus value to filtered value
//!
//! Every parse error carries the character span it refers to in the
//! original pattern, so callers can point at the offending text.
//!
//! ## Usage
//!
//! ```rust
//! use serde_json::json;
//! use subobject_engine::compile;
//!
//! let filter = compile("{foo: {bar}}")?;
//! let filtered = filter.apply(&json!({"foo": [{"bar": 1, "baz": 2}], "qux": 3}));
//!
//! assert_eq!(filtered, json!({"foo": [{"bar": 1}]}));
//! # Ok::<(), subobject_engine::ParsingError>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod ast;
pub mod compiler;
pub mod config;
pub mod error;
pub mod filter;
pub mod projection;
pub mod selector_tree;
pub mod tokenizer;
pub mod tokens;

pub use crate::{
    ast::Selector,
    compiler::{PatternCompiler, compile},
    config::{ConfigResult, ConfigurationError, DEFAULT_MAX_DEPTH, ParserConfig},
    error::{ErrorKind, Expectation, ParseResult, ParsingError},
    filter::CompiledFilter,
    projection::{project, project_owned},
    tokens::{Span, Token, TokenKind},
};
