//! Quoted key tokenization
//!
//! A quoted key runs from `"` to the first unescaped `"`. Only `\"` and `\\`
//! are escape pairs; any other backslash is kept as written.

use super::core::Tokenizer;
use crate::{
    error::{ErrorKind, ParseResult, ParsingError},
    tokens::Token,
};

/// Read a quoted key starting at the opening quote `start`
///
/// Returns the position just past the closing quote.
pub(crate) fn read_quoted_text(tokenizer: &mut Tokenizer, start: usize) -> ParseResult<usize> {
    let closing = find_closing_quote(&tokenizer.chars, start)
        .ok_or_else(|| ParsingError::new(ErrorKind::MissingClosingQuote, start, 1))?;

    let raw: String = tokenizer.chars[start + 1..closing].iter().collect();

    // Span includes both quotes
    tokenizer
        .tokens
        .push(Token::text(unescape(&raw), start, closing + 1 - start));

    Ok(closing + 1)
}

fn find_closing_quote(chars: &[char], start: usize) -> Option<usize> {
    let mut i = start + 1;

    while i < chars.len() {
        match chars[i] {
            '\\' if matches!(chars.get(i + 1), Some('"' | '\\')) => i += 2,
            '"' => return Some(i),
            _ => i += 1,
        }
    }

    None
}

/// `\"` becomes `"`, then `\\` becomes `\`
fn unescape(raw: &str) -> String {
    raw.replace("\\\"", "\"").replace("\\\\", "\\")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closing_quote_skips_escaped_quotes() {
        let chars: Vec<char> = r#""a\"b""#.chars().collect();
        assert_eq!(find_closing_quote(&chars, 0), Some(5));
    }

    #[test]
    fn closing_quote_after_escaped_backslash() {
        let chars: Vec<char> = r#""a\\"b"#.chars().collect();
        assert_eq!(find_closing_quote(&chars, 0), Some(4));
    }

    #[test]
    fn unescape_handles_both_escapes() {
        assert_eq!(unescape(r#"a \"quoted\" key"#), r#"a "quoted" key"#);
        assert_eq!(unescape(r"back\\slash"), r"back\slash");
        assert_eq!(unescape(r"\n stays"), r"\n stays");
    }
}
