//! Core `SubobjectBuilder` structure and compilation

use subobject_engine::{
    CompiledFilter, ConfigurationError, ParserConfig, ParsingError, PatternCompiler,
};

/// Failure to configure or compile a pattern
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubobjectError {
    #[error(transparent)]
    Parsing(#[from] ParsingError),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// Main entry point providing static builder methods
pub struct Subobject;

impl Subobject {
    /// Start building a filter for `pattern`
    #[must_use]
    pub fn pattern(pattern: &str) -> SubobjectBuilder<'_> {
        SubobjectBuilder::new(pattern)
    }
}

/// Fluent builder collecting parser settings before compiling
#[derive(Debug, Clone)]
pub struct SubobjectBuilder<'p> {
    pattern: &'p str,
    config: ParserConfig,
}

impl<'p> SubobjectBuilder<'p> {
    #[must_use]
    pub fn new(pattern: &'p str) -> Self {
        Self {
            pattern,
            config: ParserConfig::default(),
        }
    }

    /// Replace all parser settings at once
    #[must_use]
    pub fn config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    /// Limit how deeply objects may nest, the root object included
    #[must_use]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.config = self.config.with_max_depth(max_depth);
        self
    }

    /// Validate the settings and compile the pattern
    ///
    /// # Errors
    ///
    /// - `SubobjectError::Configuration` if the settings are invalid
    /// - `SubobjectError::Parsing` if the pattern is malformed
    pub fn compile(self) -> Result<CompiledFilter, SubobjectError> {
        tracing::debug!(max_depth = self.config.max_depth, "compiling subobject pattern");

        let compiler = PatternCompiler::with_config(self.config)?;
        Ok(compiler.compile(self.pattern)?)
    }
}
