//! Selector tree construction
//!
//! Recursive-descent parsing of token sequences into ordered selector trees:
//!
//! ```text
//! Root  := '{' Expr* '}'
//! Expr* := Expr (',' Expr)* ','?
//! Expr  := Text | Text ':' '{' Expr* '}'
//! ```
//!
//! The free functions use the default [`ParserConfig`]; construct a
//! [`SelectorTreeBuilder`] to apply a different nesting limit.

mod braces;
mod builder;
mod core;

pub use braces::find_closing_brace;
pub use self::core::{NextExpression, SelectorTreeBuilder};

use crate::{ast::Selector, config::ParserConfig, error::ParseResult, tokens::Token};

/// Read one key expression from tokens inside the root object
///
/// # Errors
///
/// See [`SelectorTreeBuilder::read_next_expression`].
pub fn read_next_expression(position: usize, tokens: &[Token]) -> ParseResult<NextExpression> {
    SelectorTreeBuilder::new(ParserConfig::default()).read_next_expression(position, tokens, 1)
}

/// Build the sibling selectors of the root object's interior
///
/// # Errors
///
/// See [`SelectorTreeBuilder::build_object`].
pub fn build_object_selectors(tokens: &[Token]) -> ParseResult<Vec<Selector>> {
    SelectorTreeBuilder::new(ParserConfig::default()).build_object(tokens, 1)
}

/// Build the selector tree of a complete pattern
///
/// # Errors
///
/// See [`SelectorTreeBuilder::build_root`].
pub fn build_root_object_selectors(tokens: &[Token]) -> ParseResult<Vec<Selector>> {
    SelectorTreeBuilder::new(ParserConfig::default()).build_root(tokens)
}
