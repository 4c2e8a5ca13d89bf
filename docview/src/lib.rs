//! Typed, fail-fast accessors over JSON document trees.
//!
//! A document is a [`serde_json::Value`]. This crate never parses text and
//! never mutates its input; it only navigates borrowed nodes and extracts
//! values as a requested semantic type:
//! - [`access`] — shape assertions, member lookup and optional lookup
//! - [`coerce`] — string, boolean, integer and date extraction
//! - [`merge`] — shallow, right-biased merge of object documents
//!
//! Every mismatch between the expected and the actual shape is reported as a
//! [`DocError`]. Callers that treat a field as optional use
//! [`OptionalExt::optional`], which turns only shape and membership failures
//! into `None` and keeps malformed values as errors.

pub mod access;
pub mod coerce;
mod error;
pub mod merge;
mod shape;

pub use access::{
    as_array, as_object, as_primitive, get_array, get_member, get_object, get_path,
    get_primitive, try_get_array, try_get_object,
};
pub use coerce::{
    as_boolean, as_integer, as_string, get_boolean, get_date, get_integer, get_string,
};
pub use error::{DocError, DocResult, OptionalExt};
pub use merge::{merge, merge_optional, merge_values};
pub use shape::{Primitive, PrimitiveKind, Shape};

/// An object node's member map.
pub type Object = serde_json::Map<String, serde_json::Value>;
