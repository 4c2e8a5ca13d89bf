//! Error taxonomy for document access.

use crate::Shape;
use std::fmt::Display;
use thiserror::Error;

/// Result type for document access.
pub type DocResult<T> = Result<T, DocError>;

/// Errors raised when a document does not have the expected shape or content.
///
/// Nodes are rendered as compact JSON text so the error stays meaningful
/// after the document it came from is gone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocError {
    /// The node is not of the shape the operation requires.
    #[error("{}not {expected}: {actual}", subject(.member))]
    ShapeMismatch {
        expected: Shape,
        member: Option<String>,
        actual: String,
    },

    /// The node is an object but has no member with the requested name.
    #[error("element [{member}] is not a member of: {parent}")]
    MissingMember { member: String, parent: String },

    /// The node is a primitive of the wrong kind, or text that does not parse.
    #[error("{}not {expected}: {actual}", subject(.member))]
    TypeMismatch {
        expected: &'static str,
        member: Option<String>,
        actual: String,
    },

    /// A date string is not of the form `YYYY-MM-DD`.
    #[error("element [{member}] is not a date: {value} ({reason})")]
    MalformedDate {
        member: String,
        value: String,
        reason: String,
    },
}

fn subject(member: &Option<String>) -> String {
    match member {
        Some(member) => format!("element [{member}] is "),
        None => "this is ".to_string(),
    }
}

impl DocError {
    /// Create a shape mismatch error.
    #[inline]
    pub fn shape_mismatch(expected: Shape, member: Option<&str>, actual: &impl Display) -> Self {
        Self::ShapeMismatch {
            expected,
            member: member.map(str::to_owned),
            actual: actual.to_string(),
        }
    }

    /// Create a missing member error.
    #[inline]
    pub fn missing_member(member: &str, parent: &impl Display) -> Self {
        Self::MissingMember {
            member: member.to_owned(),
            parent: parent.to_string(),
        }
    }

    /// Create a type mismatch error.
    #[inline]
    pub fn type_mismatch(
        expected: &'static str,
        member: Option<&str>,
        actual: &impl Display,
    ) -> Self {
        Self::TypeMismatch {
            expected,
            member: member.map(str::to_owned),
            actual: actual.to_string(),
        }
    }

    /// Create a malformed date error.
    #[inline]
    pub fn malformed_date(member: &str, value: &str, reason: impl Into<String>) -> Self {
        Self::MalformedDate {
            member: member.to_owned(),
            value: value.to_owned(),
            reason: reason.into(),
        }
    }

    /// Returns true if this error means "the value is not there", as opposed
    /// to "the value is there but malformed".
    #[must_use]
    pub const fn is_absence(&self) -> bool {
        matches!(self, Self::ShapeMismatch { .. } | Self::MissingMember { .. })
    }

    /// The member name involved, if any.
    #[must_use]
    pub fn member(&self) -> Option<&str> {
        match self {
            Self::ShapeMismatch { member, .. } | Self::TypeMismatch { member, .. } => {
                member.as_deref()
            }
            Self::MissingMember { member, .. } | Self::MalformedDate { member, .. } => {
                Some(member)
            }
        }
    }
}

/// Converts absence failures into `None`.
pub trait OptionalExt<T> {
    /// Maps [`DocError::ShapeMismatch`] and [`DocError::MissingMember`] to
    /// `Ok(None)`. Type mismatches and malformed dates are still errors.
    fn optional(self) -> DocResult<Option<T>>;
}

impl<T> OptionalExt<T> for DocResult<T> {
    fn optional(self) -> DocResult<Option<T>> {
        match self {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.is_absence() => Ok(None),
            Err(err) => Err(err),
        }
    }
}
