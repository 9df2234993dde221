//! Fluent compilation API
//!
//! Builds compiled filters with non-default parser settings.

pub mod core;

pub use self::core::{Subobject, SubobjectBuilder, SubobjectError};
