//! Brace matching over token sequences

use crate::tokens::{Token, TokenKind};

/// Find the index of the `}` closing the object opened at `start_index`
///
/// Scanning starts after `start_index` with a depth of one, so nested
/// objects are skipped. Returns `None` when `start_index` is the last token
/// (or beyond) or when the tokens run out before the depth returns to zero.
#[must_use]
pub fn find_closing_brace(start_index: usize, tokens: &[Token]) -> Option<usize> {
    if start_index + 1 >= tokens.len() {
        return None;
    }

    let mut depth = 1usize;

    for (index, token) in tokens.iter().enumerate().skip(start_index + 1) {
        match token.kind {
            TokenKind::StartObject => depth += 1,
            TokenKind::EndObject => {
                depth -= 1;
                if depth == 0 {
                    return Some(index);
                }
            }
            _ => {}
        }
    }

    None
}
