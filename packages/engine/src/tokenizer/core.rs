//! Core tokenizer type and scanning loop
//!
//! Walks the pattern one character at a time, skipping whitespace and
//! dispatching to the quoted-text and character scanners.

use super::{characters, strings};
use crate::{error::ParseResult, tokens::Token};

/// Converts a pattern into its token sequence
pub struct Tokenizer {
    pub(crate) chars: Vec<char>,
    pub(crate) tokens: Vec<Token>,
}

impl Tokenizer {
    /// Create new tokenizer over `pattern`
    #[inline]
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        Self {
            chars: pattern.chars().collect(),
            tokens: Vec::new(),
        }
    }

    /// Scan the whole pattern into tokens, in source order
    ///
    /// # Errors
    ///
    /// - `UnexpectedCharacter` if a character can start no token
    /// - `MissingClosingQuote` if a quoted key is never closed
    pub fn tokenize(mut self) -> ParseResult<Vec<Token>> {
        let mut i = 0;

        while i < self.chars.len() {
            i = match self.chars[i] {
                c if c.is_whitespace() => i + 1,
                '"' => strings::read_quoted_text(&mut self, i)?,
                _ => characters::read_character_token(&mut self, i)?,
            };
        }

        Ok(self.tokens)
    }
}

/// Tokenize `pattern` in one call
///
/// # Errors
///
/// See [`Tokenizer::tokenize`].
#[inline]
pub fn tokenize(pattern: &str) -> ParseResult<Vec<Token>> {
    Tokenizer::new(pattern).tokenize()
}
