//! Selector tree definitions
//!
//! A compiled pattern is an ordered list of sibling [`Selector`]s, each
//! optionally owning its own ordered list of children.

use serde::{Deserialize, Serialize};

/// Individual key selection in a compiled pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selector {
    /// Name of the key to keep
    pub key: String,

    /// Nested selection applied to the key's value
    ///
    /// `None` keeps the value verbatim. `Some` keeps only the listed child
    /// keys; an empty list keeps the key with all of its fields dropped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Selector>>,
}

impl Selector {
    /// Selector keeping `key` as is
    #[inline]
    #[must_use]
    pub fn leaf(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            children: None,
        }
    }

    /// Selector keeping only `children` of `key`
    #[inline]
    #[must_use]
    pub fn branch(key: impl Into<String>, children: Vec<Selector>) -> Self {
        Self {
            key: key.into(),
            children: Some(children),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> Option<&[Selector]> {
        self.children.as_deref()
    }

    /// Number of selector levels from this selector down, counting itself
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .map_or(0, |children| children.iter().map(Selector::depth).max().unwrap_or(0))
    }
}
