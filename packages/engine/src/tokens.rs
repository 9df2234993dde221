//! Token definitions for pattern lexical analysis
//!
//! Every token carries the span of pattern text it was read from so that
//! parse errors can point back at the exact characters involved.

use serde::Serialize;

/// Character range inside the original pattern
///
/// Both fields count characters (not bytes) so spans line up with what a
/// user sees when the pattern is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    /// Zero-based character offset of the first covered character
    pub position: usize,
    /// Number of characters covered
    pub length: usize,
}

impl Span {
    #[inline]
    #[must_use]
    pub const fn new(position: usize, length: usize) -> Self {
        Self { position, length }
    }

    /// Offset one past the last covered character
    #[inline]
    #[must_use]
    pub const fn end(&self) -> usize {
        self.position + self.length
    }
}

/// Token kinds produced by the tokenizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Opening brace token ({)
    StartObject,
    /// Closing brace token (})
    EndObject,
    /// Comma separator token (,)
    Comma,
    /// Colon separator token (:)
    Colon,
    /// Key text, quoted or unquoted, with escapes already resolved
    Text(String),
}

/// A token together with the pattern span it was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    #[must_use]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    #[inline]
    #[must_use]
    pub fn start_object(position: usize) -> Self {
        Self::new(TokenKind::StartObject, Span::new(position, 1))
    }

    #[inline]
    #[must_use]
    pub fn end_object(position: usize) -> Self {
        Self::new(TokenKind::EndObject, Span::new(position, 1))
    }

    #[inline]
    #[must_use]
    pub fn comma(position: usize) -> Self {
        Self::new(TokenKind::Comma, Span::new(position, 1))
    }

    #[inline]
    #[must_use]
    pub fn colon(position: usize) -> Self {
        Self::new(TokenKind::Colon, Span::new(position, 1))
    }

    #[inline]
    #[must_use]
    pub fn text(value: impl Into<String>, position: usize, length: usize) -> Self {
        Self::new(TokenKind::Text(value.into()), Span::new(position, length))
    }

    /// Key text if this is a text token
    #[inline]
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Text(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is(&self, kind: &TokenKind) -> bool {
        &self.kind == kind
    }

    /// Get string representation for debugging
    #[must_use]
    pub fn as_debug_str(&self) -> &'static str {
        match self.kind {
            TokenKind::StartObject => "{",
            TokenKind::EndObject => "}",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::Text(_) => "text",
        }
    }
}
