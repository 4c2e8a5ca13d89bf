//! Shallow merge of object documents.
//!
//! The second object wins on every key collision. Nested objects are replaced
//! wholesale, never combined.

use crate::access::as_object;
use crate::{DocResult, Object};
use serde_json::Value;
use tracing::debug;

/// Returns a new object holding all members of `first`, overwritten or
/// extended by all members of `second`.
///
/// Keys keep the position they have in `first`; keys only in `second` follow
/// in `second`'s order.
#[must_use]
pub fn merge(first: &Object, second: &Object) -> Object {
    let mut merged = first.clone();
    merged.extend(second.iter().map(|(k, v)| (k.clone(), v.clone())));
    debug!(
        first = first.len(),
        second = second.len(),
        merged = merged.len(),
        "Merged objects"
    );
    merged
}

/// Merges two optional objects. Either side being present is enough to
/// produce a result; a lone present side is returned unchanged.
#[must_use]
pub fn merge_optional(first: Option<Object>, second: Option<Object>) -> Option<Object> {
    match (first, second) {
        (Some(mut first), Some(second)) => {
            first.extend(second);
            Some(first)
        }
        (first @ Some(_), None) => first,
        (None, second) => second,
    }
}

/// Merges two nodes that must both be objects.
pub fn merge_values(first: &Value, second: &Value) -> DocResult<Value> {
    Ok(Value::Object(merge(as_object(first)?, as_object(second)?)))
}
