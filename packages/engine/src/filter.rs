//! Compiled filter handle
//!
//! Wraps an immutable selector tree together with the pattern it was
//! compiled from. Cloning is cheap and the handle can be shared across
//! threads; applying it never mutates anything.

use std::{fmt, str::FromStr, sync::Arc};

use serde::Serialize;
use serde_json::Value;

use crate::{
    ast::Selector,
    compiler::PatternCompiler,
    error::ParsingError,
    projection::{project, project_owned},
};

/// Reusable projection compiled from a pattern
#[derive(Debug, Clone)]
pub struct CompiledFilter {
    selectors: Arc<[Selector]>,
    pattern: Arc<str>,
}

impl CompiledFilter {
    #[inline]
    pub(crate) fn new(selectors: Vec<Selector>, pattern: &str) -> Self {
        Self {
            selectors: selectors.into(),
            pattern: pattern.into(),
        }
    }

    /// Original pattern string
    #[inline]
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Compiled root selectors
    #[inline]
    #[must_use]
    pub fn selectors(&self) -> &[Selector] {
        &self.selectors
    }

    /// Build a filtered copy of `value`
    #[must_use]
    pub fn apply(&self, value: &Value) -> Value {
        log::trace!("applying subobject filter {}", self.pattern);
        project(&self.selectors, value)
    }

    /// Filter `value` in place of a copy, moving kept values out of it
    #[must_use]
    pub fn apply_owned(&self, value: Value) -> Value {
        log::trace!("applying subobject filter {} by value", self.pattern);
        project_owned(&self.selectors, value)
    }

    /// Serialize `value` to JSON and filter the result
    ///
    /// # Errors
    ///
    /// Returns the `serde_json::Error` raised if `value` cannot be
    /// represented as JSON. Projection itself cannot fail.
    pub fn apply_serialize<T>(&self, value: &T) -> Result<Value, serde_json::Error>
    where
        T: Serialize + ?Sized,
    {
        serde_json::to_value(value).map(|json| self.apply_owned(json))
    }
}

impl FromStr for CompiledFilter {
    type Err = ParsingError;

    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        PatternCompiler::new().compile(pattern)
    }
}

impl fmt::Display for CompiledFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}
