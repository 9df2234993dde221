//! Selector tree application to JSON values
//!
//! Projection never fails: keys missing from the input are omitted from the
//! output, and values that are not objects or arrays pass through unchanged.

use serde_json::{Map, Value};

use crate::ast::Selector;

/// Project `value` through `selectors`, cloning the selected leaves
///
/// Arrays are projected element-wise. Objects are rebuilt holding only the
/// selected keys that are present, in selector declaration order.
#[must_use]
pub fn project(selectors: &[Selector], value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| project(selectors, item))
                .collect(),
        ),
        Value::Object(object) => Value::Object(project_object(selectors, object)),
        scalar => scalar.clone(),
    }
}

fn project_object(selectors: &[Selector], object: &Map<String, Value>) -> Map<String, Value> {
    let mut projected = Map::with_capacity(selectors.len());

    for selector in selectors {
        let Some(child) = object.get(&selector.key) else {
            continue;
        };

        let kept = match selector.children() {
            Some(children) => project(children, child),
            None => child.clone(),
        };

        projected.insert(selector.key.clone(), kept);
    }

    projected
}

/// Project `value` through `selectors`, moving the selected leaves out
///
/// Produces the same result as [`project`] without cloning kept values.
#[must_use]
pub fn project_owned(selectors: &[Selector], value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| project_owned(selectors, item))
                .collect(),
        ),
        Value::Object(object) => Value::Object(project_object_owned(selectors, object)),
        scalar => scalar,
    }
}

fn project_object_owned(selectors: &[Selector], mut object: Map<String, Value>) -> Map<String, Value> {
    let mut projected = Map::with_capacity(selectors.len());

    for selector in selectors {
        // Siblings never share a key, so removal cannot starve a later selector
        let Some(child) = object.remove(&selector.key) else {
            continue;
        };

        let kept = match selector.children() {
            Some(children) => project_owned(children, child),
            None => child,
        };

        projected.insert(selector.key.clone(), kept);
    }

    projected
}
