//! Shape assertions and member lookup.
//!
//! Lookup always checks shape before membership: a non-object node yields
//! [`DocError::ShapeMismatch`] even when the member name is irrelevant, and
//! only an object without the key yields [`DocError::MissingMember`].

use crate::{DocError, DocResult, Object, Primitive, Shape};
use serde_json::Value;
use tracing::debug;

/// Asserts that `node` is an array.
pub fn as_array(node: &Value) -> DocResult<&Vec<Value>> {
    match node {
        Value::Array(items) => Ok(items),
        other => Err(DocError::shape_mismatch(Shape::Array, None, other)),
    }
}

/// Asserts that `node` is an object.
pub fn as_object(node: &Value) -> DocResult<&Object> {
    match node {
        Value::Object(members) => Ok(members),
        other => Err(DocError::shape_mismatch(Shape::Object, None, other)),
    }
}

/// Asserts that `node` is a string, boolean or number.
pub fn as_primitive(node: &Value) -> DocResult<Primitive<'_>> {
    Primitive::of(node).ok_or_else(|| DocError::shape_mismatch(Shape::Primitive, None, node))
}

/// Looks up `member` in `node`, which must be an object.
pub fn get_member<'a>(node: &'a Value, member: &str) -> DocResult<&'a Value> {
    as_object(node)?
        .get(member)
        .ok_or_else(|| DocError::missing_member(member, node))
}

/// Follows `segments` one member lookup at a time, failing at the first
/// segment that cannot be resolved. An empty path returns `node` itself.
pub fn get_path<'a, S: AsRef<str>>(node: &'a Value, segments: &[S]) -> DocResult<&'a Value> {
    segments
        .iter()
        .try_fold(node, |current, segment| get_member(current, segment.as_ref()))
}

/// Looks up `member` and asserts it is an array.
pub fn get_array<'a>(node: &'a Value, member: &str) -> DocResult<&'a Vec<Value>> {
    match get_member(node, member)? {
        Value::Array(items) => Ok(items),
        other => Err(DocError::shape_mismatch(Shape::Array, Some(member), other)),
    }
}

/// Looks up `member` and asserts it is an object.
pub fn get_object<'a>(node: &'a Value, member: &str) -> DocResult<&'a Object> {
    match get_member(node, member)? {
        Value::Object(members) => Ok(members),
        other => Err(DocError::shape_mismatch(Shape::Object, Some(member), other)),
    }
}

/// Looks up `member` and asserts it is a primitive.
pub fn get_primitive<'a>(node: &'a Value, member: &str) -> DocResult<Primitive<'a>> {
    let sub = get_member(node, member)?;
    Primitive::of(sub)
        .ok_or_else(|| DocError::shape_mismatch(Shape::Primitive, Some(member), sub))
}

/// Like [`get_array`], but any failure means the array is absent.
pub fn try_get_array<'a>(node: &'a Value, member: &str) -> Option<&'a Vec<Value>> {
    match get_array(node, member) {
        Ok(items) => Some(items),
        Err(err) => {
            debug!(member, %err, "Array member absent");
            None
        }
    }
}

/// Like [`get_object`], but any failure means the object is absent.
pub fn try_get_object<'a>(node: &'a Value, member: &str) -> Option<&'a Object> {
    match get_object(node, member) {
        Ok(members) => Some(members),
        Err(err) => {
            debug!(member, %err, "Object member absent");
            None
        }
    }
}
