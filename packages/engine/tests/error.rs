//! Parsing error tests
//!
//! Display formatting, ANSI highlighting and structured serialization.

use serde_json::json;
use subobject_engine::{ErrorKind, Expectation, ParsingError, compile};

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn test_error_display_formatting() {
        let error = ParsingError::new(ErrorKind::UnexpectedCharacter, 3, 1);
        assert_eq!(
            error.to_string(),
            "ParsingError: Unexpected character (position: 3, length: 1)"
        );
    }

    #[test]
    fn test_render_without_highlight() {
        let error = compile("foo%bar").expect_err("'%' should be rejected");
        assert_eq!(error.render(false), error.to_string());
    }

    #[test]
    fn test_render_with_highlight() {
        let error = compile("foo%bar").expect_err("'%' should be rejected");
        assert_eq!(
            error.render(true),
            "ParsingError: Unexpected character (position: 3, length: 1)\n\
             foo\x1B[31;47;1m%\x1B[0mbar"
        );
    }

    #[test]
    fn test_render_highlights_whole_trailing_region() {
        let error = compile("{foo} bar,baz").expect_err("Trailing text should be rejected");
        assert_eq!(
            error.highlight().as_deref(),
            Some("{foo} \x1B[31;47;1mbar,baz\x1B[0m")
        );
    }

    #[test]
    fn test_render_without_pattern() {
        let error = ParsingError::new(ErrorKind::DuplicateKeySpecified, 5, 3);
        assert_eq!(error.pattern(), None);
        assert_eq!(error.highlight(), None);
        assert_eq!(error.render(true), error.to_string());
    }

    #[test]
    fn test_highlight_non_ascii_pattern() {
        let error = compile(r#"{"héllo", ü}"#).expect_err("'ü' should be rejected");
        assert_eq!(
            error.highlight().as_deref(),
            Some("{\"héllo\", \x1B[31;47;1mü\x1B[0m}")
        );
    }

    #[test]
    fn test_empty_span_highlight() {
        let error = compile("").expect_err("Empty pattern should be rejected");
        assert_eq!(error.highlight().as_deref(), Some("\x1B[31;47;1m\x1B[0m"));
    }

    #[test]
    fn test_attached_pattern_is_not_replaced() {
        let error = ParsingError::new(ErrorKind::NoInputProvided, 0, 0)
            .with_pattern("first")
            .with_pattern("second");
        assert_eq!(error.pattern(), Some("first"));
    }

    #[test]
    fn test_error_serialization() {
        let error = compile("{foo bar}").expect_err("Missing separator should be rejected");
        let value = serde_json::to_value(&error).expect("Failed to serialize error");

        assert_eq!(
            value,
            json!({
                "kind": {"UnexpectedToken": "CommaOrColon"},
                "position": 5,
                "length": 3,
                "message": "Unexpected token (was expecting a comma or a colon)",
                "pattern": "{foo bar}"
            })
        );
    }

    #[test]
    fn test_kind_messages() {
        assert_eq!(
            ErrorKind::UnexpectedToken(Expectation::OpenBrace).to_string(),
            "Unexpected token (expected open brace)"
        );
        assert_eq!(
            ErrorKind::UnexpectedTextAfterEndOfObject.message(),
            "Unexpected text after end of object"
        );
        assert_eq!(
            ErrorKind::NestingTooDeep.message(),
            "Maximum nesting depth exceeded"
        );
    }
}
