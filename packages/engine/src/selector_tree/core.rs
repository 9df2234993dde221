//! Core selector tree builder and single expression reading
//!
//! Contains the `SelectorTreeBuilder` struct and `read_next_expression`,
//! which reads one key expression (leaf or nested object) from a token slice.

use super::braces::find_closing_brace;
use crate::{
    ast::Selector,
    config::ParserConfig,
    error::{ErrorKind, Expectation, ParseResult, ParsingError},
    tokens::{Token, TokenKind},
};

/// Outcome of reading one key expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextExpression {
    /// Token index just past the expression and its separator
    pub next_position: usize,
    /// The selector read, `None` once the tokens are exhausted
    pub selector: Option<Selector>,
}

impl NextExpression {
    #[inline]
    fn found(next_position: usize, selector: Selector) -> Self {
        Self {
            next_position,
            selector: Some(selector),
        }
    }

    #[inline]
    fn exhausted(position: usize) -> Self {
        Self {
            next_position: position,
            selector: None,
        }
    }
}

/// Recursive-descent builder turning tokens into selector trees
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectorTreeBuilder {
    pub(super) config: ParserConfig,
}

impl SelectorTreeBuilder {
    #[inline]
    #[must_use]
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Read exactly one key expression starting at `position`
    ///
    /// `depth` is the nesting depth of the object the tokens belong to.
    ///
    /// # Errors
    ///
    /// - `UnexpectedToken` if the token at `position` is not a key, or the
    ///   token after the key is neither a comma nor a colon
    /// - `ExpectedObjectAfterColon`, `MissingClosingBrace`,
    ///   `ExpectedCommaBetweenExpressions` or `NestingTooDeep` for a
    ///   malformed nested object
    pub fn read_next_expression(
        &self,
        position: usize,
        tokens: &[Token],
        depth: usize,
    ) -> ParseResult<NextExpression> {
        let Some(token) = tokens.get(position) else {
            return Ok(NextExpression::exhausted(position));
        };

        let Some(key) = token.as_text() else {
            return Err(ParsingError::at(
                ErrorKind::UnexpectedToken(Expectation::Key),
                token.span,
            ));
        };

        let Some(separator) = tokens.get(position + 1) else {
            return Ok(NextExpression::found(position + 1, Selector::leaf(key)));
        };

        match separator.kind {
            TokenKind::Comma => Ok(NextExpression::found(position + 2, Selector::leaf(key))),
            TokenKind::Colon => self.read_nested_object(key, separator, position + 2, tokens, depth),
            _ => Err(ParsingError::at(
                ErrorKind::UnexpectedToken(Expectation::CommaOrColon),
                separator.span,
            )),
        }
    }

    /// Read `{ ... }` following `key:`, plus the comma separating it from the next expression
    fn read_nested_object(
        &self,
        key: &str,
        colon: &Token,
        opening_index: usize,
        tokens: &[Token],
        depth: usize,
    ) -> ParseResult<NextExpression> {
        let opening = match tokens.get(opening_index) {
            Some(token) if token.is(&TokenKind::StartObject) => token,
            _ => {
                return Err(ParsingError::at(
                    ErrorKind::ExpectedObjectAfterColon,
                    colon.span,
                ));
            }
        };

        let child_depth = depth + 1;
        if child_depth > self.config.max_depth {
            return Err(ParsingError::at(ErrorKind::NestingTooDeep, opening.span));
        }

        let closing_index = find_closing_brace(opening_index, tokens)
            .ok_or_else(|| ParsingError::at(ErrorKind::MissingClosingBrace, opening.span))?;

        let children = self.build_object(&tokens[opening_index + 1..closing_index], child_depth)?;

        let next_position = match tokens.get(closing_index + 1) {
            None => closing_index + 1,
            Some(token) if token.is(&TokenKind::Comma) => closing_index + 2,
            Some(token) => {
                return Err(ParsingError::at(
                    ErrorKind::ExpectedCommaBetweenExpressions,
                    token.span,
                ));
            }
        };

        Ok(NextExpression::found(
            next_position,
            Selector::branch(key, children),
        ))
    }
}
