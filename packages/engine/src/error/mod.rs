//! Pattern error handling module
//!
//! Positional error types shared by the tokenizer and the selector tree
//! builder, plus terminal rendering with span highlighting.

mod render;
mod types;

pub use types::{ErrorKind, Expectation, ParseResult, ParsingError};
