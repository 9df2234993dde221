//! Compiler and compiled filter tests
//!
//! End-to-end pattern compilation, error spans relative to the pattern, and
//! reuse of compiled filters.

use std::str::FromStr;

use serde::Serialize;
use serde_json::json;
use subobject_engine::{
    CompiledFilter, ConfigurationError, ErrorKind, Expectation, ParserConfig, PatternCompiler,
    Selector, Span, compile,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[cfg(test)]
mod compile_tests {
    use super::*;

    #[test]
    fn test_simple_key() {
        init_logging();
        let filter = compile("{foo}").expect("Failed to compile '{foo}'");

        assert_eq!(filter.pattern(), "{foo}");
        assert_eq!(filter.selectors(), &[Selector::leaf("foo")]);
        assert_eq!(filter.apply(&json!({"foo": 1, "bar": 2})), json!({"foo": 1}));
    }

    #[test]
    fn test_nested_key() {
        let filter = compile("{foo: {bar}}").expect("Failed to compile nested pattern");
        let input = json!({"foo": {"bar": 1, "baz": 2}, "qux": 3});

        assert_eq!(filter.apply(&input), json!({"foo": {"bar": 1}}));
    }

    #[test]
    fn test_nested_key_over_array() {
        let filter = compile("{foo: {bar}}").expect("Failed to compile nested pattern");
        let input = json!({"foo": [{"bar": 1, "baz": 2}, {"bar": 3, "baz": 4}]});

        assert_eq!(filter.apply(&input), json!({"foo": [{"bar": 1}, {"bar": 3}]}));
    }

    #[test]
    fn test_quoted_keys() {
        let filter =
            compile(r#"{foo: {bar}, "floob flarb", "a\"b"}"#).expect("Failed to compile quoted keys");
        let input = json!({
            "foo": {"bar": 123, "baz": "abc"},
            "floob flarb": [1, 2],
            "a\"b": true,
            "blah": true
        });

        assert_eq!(
            filter.apply(&input),
            json!({"foo": {"bar": 123}, "floob flarb": [1, 2], "a\"b": true})
        );
    }

    #[test]
    fn test_valid_edge_patterns() {
        assert!(compile("{}").expect("Empty root object is valid").selectors().is_empty());
        assert_eq!(
            compile("{foo,}").expect("Trailing comma is valid").selectors(),
            &[Selector::leaf("foo")]
        );
        assert_eq!(
            compile("{foo: {}}").expect("Empty child list is valid").selectors(),
            &[Selector::branch("foo", Vec::new())]
        );
        assert_eq!(
            compile(" { foo : { bar } , baz } ").expect("Whitespace is ignored").selectors(),
            &[
                Selector::branch("foo", vec![Selector::leaf("bar")]),
                Selector::leaf("baz")
            ]
        );
    }

    #[test]
    fn test_from_str_and_display() {
        let filter = CompiledFilter::from_str("{a: {b}}").expect("Failed to parse filter");
        assert_eq!(filter.to_string(), "{a: {b}}");

        let parsed: Result<CompiledFilter, _> = "{a".parse();
        assert!(parsed.is_err());
    }

    #[test]
    fn test_validate() {
        let compiler = PatternCompiler::new();
        assert!(compiler.validate("{a, b: {c}}").is_ok());
        assert!(compiler.validate("{a b}").is_err());
    }
}

#[cfg(test)]
mod compile_error_tests {
    use super::*;

    fn error_for(pattern: &str) -> (ErrorKind, Span) {
        let error = compile(pattern).expect_err("Pattern should be rejected");
        assert_eq!(error.pattern(), Some(pattern));
        (error.kind(), error.span())
    }

    #[test]
    fn test_invalid_character() {
        assert_eq!(
            error_for("foo%bar"),
            (ErrorKind::UnexpectedCharacter, Span::new(3, 1))
        );
    }

    #[test]
    fn test_trailing_text() {
        assert_eq!(
            error_for("{foo} bar"),
            (ErrorKind::UnexpectedTextAfterEndOfObject, Span::new(6, 3))
        );
        assert_eq!(
            error_for("{foo} bar,baz"),
            (ErrorKind::UnexpectedTextAfterEndOfObject, Span::new(6, 7))
        );
        assert_eq!(
            error_for(r#"{foo}{bar} "x""#),
            (ErrorKind::UnexpectedTextAfterEndOfObject, Span::new(5, 9))
        );
    }

    #[test]
    fn test_duplicate_key() {
        assert_eq!(
            error_for("{foo,foo}"),
            (ErrorKind::DuplicateKeySpecified, Span::new(5, 3))
        );
        assert_eq!(
            error_for(r#"{foo, "foo"}"#),
            (ErrorKind::DuplicateKeySpecified, Span::new(6, 5))
        );
        assert_eq!(
            error_for("{a: {x, y, x}}"),
            (ErrorKind::DuplicateKeySpecified, Span::new(11, 1))
        );
    }

    #[test]
    fn test_root_shape_errors() {
        assert_eq!(error_for(""), (ErrorKind::NoInputProvided, Span::new(0, 0)));
        assert_eq!(error_for("   "), (ErrorKind::NoInputProvided, Span::new(0, 0)));
        assert_eq!(
            error_for("foo"),
            (ErrorKind::UnexpectedToken(Expectation::OpenBrace), Span::new(0, 3))
        );
        assert_eq!(
            error_for("{foo"),
            (ErrorKind::CannotFindClosingBrace, Span::new(0, 1))
        );
        assert_eq!(
            error_for("  {foo: {bar}"),
            (ErrorKind::CannotFindClosingBrace, Span::new(2, 1))
        );
    }

    #[test]
    fn test_expression_errors() {
        assert_eq!(
            error_for("{foo:}"),
            (ErrorKind::ExpectedObjectAfterColon, Span::new(4, 1))
        );
        assert_eq!(
            error_for("{foo: bar}"),
            (ErrorKind::ExpectedObjectAfterColon, Span::new(4, 1))
        );
        assert_eq!(
            error_for("{foo:{bar} baz}"),
            (ErrorKind::ExpectedCommaBetweenExpressions, Span::new(11, 3))
        );
        assert_eq!(
            error_for("{foo bar}"),
            (ErrorKind::UnexpectedToken(Expectation::CommaOrColon), Span::new(5, 3))
        );
        assert_eq!(
            error_for("{,foo}"),
            (ErrorKind::UnexpectedToken(Expectation::Key), Span::new(1, 1))
        );
        assert_eq!(
            error_for("{foo,,bar}"),
            (ErrorKind::UnexpectedToken(Expectation::Key), Span::new(5, 1))
        );
    }

    #[test]
    fn test_nested_errors_report_absolute_spans() {
        assert_eq!(
            error_for("{a: {b: {c d}}}"),
            (ErrorKind::UnexpectedToken(Expectation::CommaOrColon), Span::new(11, 1))
        );
    }

    #[test]
    fn test_error_spans_stay_inside_pattern() {
        let patterns = [
            "",
            "foo%bar",
            "{foo} bar",
            "{foo,foo}",
            "{foo:}",
            "{foo",
            "foo",
            "{foo bar}",
            r#"{"unterminated}"#,
            "{a: {b}} c d e",
            "{,}",
        ];

        for pattern in patterns {
            let error = compile(pattern).expect_err("Pattern should be rejected");
            assert!(
                error.span().end() <= pattern.chars().count(),
                "span {:?} escapes pattern {pattern:?}",
                error.span()
            );
        }
    }
}

#[cfg(test)]
mod compiled_filter_tests {
    use super::*;

    #[derive(Serialize)]
    struct Book {
        title: String,
        author: Author,
        pages: u32,
    }

    #[derive(Serialize)]
    struct Author {
        name: String,
        born: u16,
    }

    #[test]
    fn test_apply_serialize() {
        let filter = compile("{title, author: {name}}").expect("Failed to compile");
        let book = Book {
            title: "Dune".to_string(),
            author: Author {
                name: "Frank Herbert".to_string(),
                born: 1920,
            },
            pages: 412,
        };

        let filtered = filter.apply_serialize(&book).expect("Book serializes to JSON");
        assert_eq!(
            filtered,
            json!({"title": "Dune", "author": {"name": "Frank Herbert"}})
        );
    }

    #[test]
    fn test_apply_owned_matches_apply() {
        let filter = compile("{a: {b}, c}").expect("Failed to compile");
        let input = json!({"a": [{"b": 1, "x": 2}], "c": {"d": 3}, "e": 4});

        assert_eq!(filter.apply_owned(input.clone()), filter.apply(&input));
    }

    #[test]
    fn test_filter_is_reusable() {
        let filter = compile("{id}").expect("Failed to compile");

        for id in 0..10 {
            assert_eq!(filter.apply(&json!({"id": id, "other": id})), json!({"id": id}));
        }
    }

    #[test]
    fn test_filter_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CompiledFilter>();

        let filter = compile("{user: {name}}").expect("Failed to compile");

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4usize)
                .map(|i| {
                    let filter = &filter;
                    scope.spawn(move || {
                        filter.apply(&json!({"user": {"name": i, "secret": i}}))
                    })
                })
                .collect();

            for (i, handle) in handles.into_iter().enumerate() {
                let output = handle.join().expect("Projection thread panicked");
                assert_eq!(output, json!({"user": {"name": i}}));
            }
        });
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_zero_depth_is_rejected() {
        let error = PatternCompiler::with_config(ParserConfig::new().with_max_depth(0))
            .expect_err("max_depth of zero is invalid");
        assert!(matches!(error, ConfigurationError::InvalidParameter(_)));
    }

    #[test]
    fn test_custom_depth_limit() {
        let compiler = PatternCompiler::with_config(ParserConfig::new().with_max_depth(2))
            .expect("max_depth of two is valid");
        assert_eq!(compiler.config().max_depth, 2);

        assert!(compiler.compile("{a: {b}}").is_ok());

        let error = compiler.compile("{a: {b: {c}}}").expect_err("Depth 3 exceeds 2");
        assert_eq!(error.kind(), ErrorKind::NestingTooDeep);
        assert_eq!(error.span(), Span::new(8, 1));
    }

    #[test]
    fn test_default_depth_limit() {
        let within = format!("{{{}x{}", "a:{".repeat(127), "}".repeat(128));
        assert!(compile(&within).is_ok(), "128 levels fit the default limit");

        let beyond = format!("{{{}x{}", "a:{".repeat(128), "}".repeat(129));
        let error = compile(&beyond).expect_err("129 levels exceed the default limit");
        assert_eq!(error.kind(), ErrorKind::NestingTooDeep);
    }
}
