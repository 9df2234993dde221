//! Projection engine
//!
//! Applies compiled selector trees to dynamic `serde_json::Value`s.

mod engine;

pub use engine::{project, project_owned};
