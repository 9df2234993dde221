//! Pattern compiler and entry point
//!
//! Runs the tokenizer and the selector tree builder, and attaches the
//! source pattern to any error before handing it to the caller.

use crate::{
    ast::Selector,
    config::{ConfigResult, ParserConfig},
    error::ParseResult,
    filter::CompiledFilter,
    selector_tree::SelectorTreeBuilder,
    tokenizer::tokenize,
};

/// Pattern parser and compiler
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternCompiler {
    config: ParserConfig,
}

impl PatternCompiler {
    /// Compiler with the default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiler with a custom configuration
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` if `config` fails validation.
    pub fn with_config(config: ParserConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Compile `pattern` into a reusable filter
    ///
    /// # Errors
    ///
    /// Returns the first `ParsingError` met while tokenizing or building,
    /// with `pattern` attached. Its span is relative to `pattern`.
    pub fn compile(&self, pattern: &str) -> ParseResult<CompiledFilter> {
        match self.compile_selectors(pattern) {
            Ok(selectors) => Ok(CompiledFilter::new(selectors, pattern)),
            Err(error) => {
                tracing::debug!(
                    kind = ?error.kind(),
                    position = error.position(),
                    length = error.length(),
                    "failed to compile subobject pattern"
                );
                Err(error.with_pattern(pattern))
            }
        }
    }

    /// Check `pattern` without keeping the compiled filter
    ///
    /// # Errors
    ///
    /// Same as [`Self::compile`].
    pub fn validate(&self, pattern: &str) -> ParseResult<()> {
        self.compile(pattern).map(|_| ())
    }

    fn compile_selectors(&self, pattern: &str) -> ParseResult<Vec<Selector>> {
        let tokens = tokenize(pattern)?;
        let selectors = SelectorTreeBuilder::new(self.config).build_root(&tokens)?;

        tracing::debug!(
            pattern_chars = pattern.chars().count(),
            tokens = tokens.len(),
            selectors = selectors.len(),
            "compiled subobject pattern"
        );

        Ok(selectors)
    }
}

/// Compile `pattern` with the default configuration
///
/// # Errors
///
/// See [`PatternCompiler::compile`].
#[inline]
pub fn compile(pattern: &str) -> ParseResult<CompiledFilter> {
    PatternCompiler::new().compile(pattern)
}
