//! Structural categories of document nodes.

use serde_json::{Number, Value};
use std::fmt;

/// The structural category of a node, independent of its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Object,
    Array,
    /// A string, boolean or number.
    Primitive,
    /// JSON `null`. Never satisfies a shape assertion.
    Null,
}

impl Shape {
    /// Returns the shape of `node`.
    #[must_use]
    pub const fn of(node: &Value) -> Self {
        match node {
            Value::Object(_) => Self::Object,
            Value::Array(_) => Self::Array,
            Value::String(_) | Value::Bool(_) | Value::Number(_) => Self::Primitive,
            Value::Null => Self::Null,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Object => "an object",
            Self::Array => "an array",
            Self::Primitive => "a primitive",
            Self::Null => "null",
        })
    }
}

/// Which kind of value a [`Primitive`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    String,
    Bool,
    Number,
}

/// A borrowed view of a primitive node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive<'a> {
    String(&'a str),
    Bool(bool),
    Number(&'a Number),
}

impl<'a> Primitive<'a> {
    /// Returns the primitive view of `node`, or `None` for objects, arrays and null.
    #[must_use]
    pub fn of(node: &'a Value) -> Option<Self> {
        match node {
            Value::String(s) => Some(Self::String(s)),
            Value::Bool(b) => Some(Self::Bool(*b)),
            Value::Number(n) => Some(Self::Number(n)),
            Value::Object(_) | Value::Array(_) | Value::Null => None,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> PrimitiveKind {
        match self {
            Self::String(_) => PrimitiveKind::String,
            Self::Bool(_) => PrimitiveKind::Bool,
            Self::Number(_) => PrimitiveKind::Number,
        }
    }
}

/// Renders the primitive as JSON text, so strings keep their quotes.
impl fmt::Display for Primitive<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => {
                let quoted = serde_json::to_string(s).map_err(|_| fmt::Error)?;
                f.write_str(&quoted)
            }
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}
