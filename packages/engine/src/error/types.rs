//! Parsing error types
//!
//! Core error types shared by the tokenizer and the selector tree builder.

use std::fmt;

use serde::Serialize;

use crate::tokens::Span;

/// What the builder was looking for when it met an unexpected token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Expectation {
    /// A key was required at this position
    Key,
    /// A key was read and must be followed by a comma or a colon
    CommaOrColon,
    /// The pattern must open with a brace
    OpenBrace,
}

/// Pattern parsing error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    UnexpectedCharacter,
    MissingClosingQuote,
    UnexpectedToken(Expectation),
    ExpectedObjectAfterColon,
    MissingClosingBrace,
    ExpectedCommaBetweenExpressions,
    DuplicateKeySpecified,
    NoInputProvided,
    CannotFindClosingBrace,
    UnexpectedTextAfterEndOfObject,
    /// A nested object goes deeper than the configured limit
    NestingTooDeep,
}

impl ErrorKind {
    /// Human-readable message reported for this kind
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::UnexpectedCharacter => "Unexpected character",
            Self::MissingClosingQuote => "Missing closing quote",
            Self::UnexpectedToken(Expectation::Key) => "Unexpected token (was expecting a key)",
            Self::UnexpectedToken(Expectation::CommaOrColon) => {
                "Unexpected token (was expecting a comma or a colon)"
            }
            Self::UnexpectedToken(Expectation::OpenBrace) => {
                "Unexpected token (expected open brace)"
            }
            Self::ExpectedObjectAfterColon => "Expected object after colon",
            Self::MissingClosingBrace => "Missing closing brace",
            Self::ExpectedCommaBetweenExpressions => "Expected comma between expressions",
            Self::DuplicateKeySpecified => "Duplicate key specified",
            Self::NoInputProvided => "No input provided",
            Self::CannotFindClosingBrace => "Cannot find closing brace",
            Self::UnexpectedTextAfterEndOfObject => "Unexpected text after end of object",
            Self::NestingTooDeep => "Maximum nesting depth exceeded",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Error raised while tokenizing or building a selector tree
///
/// `position` and `length` always refer to characters of the original,
/// untokenized pattern. The pattern itself is attached by the compiler
/// once the error reaches the top-level entry point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("ParsingError: {message} (position: {position}, length: {length})")]
pub struct ParsingError {
    kind: ErrorKind,
    position: usize,
    length: usize,
    message: &'static str,
    pattern: Option<String>,
}

/// Result type for pattern parsing operations
pub type ParseResult<T> = Result<T, ParsingError>;

impl ParsingError {
    #[must_use]
    pub fn new(kind: ErrorKind, position: usize, length: usize) -> Self {
        Self {
            kind,
            position,
            length,
            message: kind.message(),
            pattern: None,
        }
    }

    /// Error covering the given token span
    #[inline]
    #[must_use]
    pub fn at(kind: ErrorKind, span: Span) -> Self {
        Self::new(kind, span.position, span.length)
    }

    /// Attach the source pattern unless one is attached already
    #[must_use]
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        if self.pattern.is_none() {
            self.pattern = Some(pattern.to_owned());
        }
        self
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    #[inline]
    #[must_use]
    pub fn span(&self) -> Span {
        Span::new(self.position, self.length)
    }

    #[inline]
    #[must_use]
    pub fn message(&self) -> &'static str {
        self.message
    }

    #[inline]
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }
}
