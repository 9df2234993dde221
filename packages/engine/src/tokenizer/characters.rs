//! Structural character and unquoted key tokenization

use super::core::Tokenizer;
use crate::{
    error::{ErrorKind, ParseResult, ParsingError},
    tokens::Token,
};

/// Characters allowed in an unquoted key: `[A-Za-z0-9$_-]`
#[inline]
#[must_use]
pub fn is_key_character(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '$' | '_' | '-')
}

/// Parse a structural token or an unquoted key starting at `i`
///
/// Returns the position just past the token.
pub(crate) fn read_character_token(tokenizer: &mut Tokenizer, i: usize) -> ParseResult<usize> {
    let token = match tokenizer.chars[i] {
        '{' => Token::start_object(i),
        '}' => Token::end_object(i),
        ',' => Token::comma(i),
        ':' => Token::colon(i),
        c if is_key_character(c) => return read_unquoted_text(tokenizer, i),
        _ => return Err(ParsingError::new(ErrorKind::UnexpectedCharacter, i, 1)),
    };

    tokenizer.tokens.push(token);
    Ok(i + 1)
}

/// Maximal run of key characters
fn read_unquoted_text(tokenizer: &mut Tokenizer, start: usize) -> ParseResult<usize> {
    let end = tokenizer.chars[start..]
        .iter()
        .position(|&c| !is_key_character(c))
        .map_or(tokenizer.chars.len(), |offset| start + offset);

    let text: String = tokenizer.chars[start..end].iter().collect();
    tokenizer.tokens.push(Token::text(text, start, end - start));

    Ok(end)
}
