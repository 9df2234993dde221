//! Object and root object selector list building

use hashbrown::HashSet;

use super::{braces::find_closing_brace, core::SelectorTreeBuilder};
use crate::{
    ast::Selector,
    error::{ErrorKind, Expectation, ParseResult, ParsingError},
    tokens::{Token, TokenKind},
};

impl SelectorTreeBuilder {
    /// Build the sibling selectors found between an object's braces
    ///
    /// # Errors
    ///
    /// Returns `DuplicateKeySpecified` at the repeated key token when a key
    /// appears twice, plus any error from [`Self::read_next_expression`].
    pub fn build_object(&self, tokens: &[Token], depth: usize) -> ParseResult<Vec<Selector>> {
        let mut selectors = Vec::new();
        let mut keys_so_far = HashSet::new();
        let mut position = 0;

        while position < tokens.len() {
            let next = self.read_next_expression(position, tokens, depth)?;

            let Some(selector) = next.selector else {
                break;
            };

            if !keys_so_far.insert(selector.key.clone()) {
                return Err(ParsingError::at(
                    ErrorKind::DuplicateKeySpecified,
                    tokens[position].span,
                ));
            }

            position = next.next_position;
            selectors.push(selector);
        }

        Ok(selectors)
    }

    /// Build the selector tree of a complete pattern
    ///
    /// The tokens must form exactly one object: an opening brace, its
    /// matching closing brace as the final token, and expressions between.
    ///
    /// # Errors
    ///
    /// - `NoInputProvided` for an empty token sequence
    /// - `UnexpectedToken` if the first token is not `{`
    /// - `CannotFindClosingBrace` if the root `{` is never closed
    /// - `UnexpectedTextAfterEndOfObject` covering everything after the root `}`
    pub fn build_root(&self, tokens: &[Token]) -> ParseResult<Vec<Selector>> {
        let Some(opening) = tokens.first() else {
            return Err(ParsingError::new(ErrorKind::NoInputProvided, 0, 0));
        };

        if !opening.is(&TokenKind::StartObject) {
            return Err(ParsingError::at(
                ErrorKind::UnexpectedToken(Expectation::OpenBrace),
                opening.span,
            ));
        }

        let closing_index = find_closing_brace(0, tokens)
            .ok_or_else(|| ParsingError::at(ErrorKind::CannotFindClosingBrace, opening.span))?;

        let last_index = tokens.len() - 1;

        if closing_index != last_index {
            let unexpected = &tokens[closing_index + 1];
            let last = &tokens[last_index];

            return Err(ParsingError::new(
                ErrorKind::UnexpectedTextAfterEndOfObject,
                unexpected.span.position,
                last.span.end() - unexpected.span.position,
            ));
        }

        self.build_object(&tokens[1..last_index], 1)
    }
}
