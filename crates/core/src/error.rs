//! Usage-error model for misuse of the comparison API.

use thiserror::Error;

/// Misuse of the comparison API by the calling test code.
///
/// These represent programming mistakes in the tests themselves, not runtime
/// conditions to recover from. The public predicates in `assertkit` turn them
/// into panics rather than returning a wrong boolean.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// A field exclusion was requested against a shape with no named fields
    /// (e.g. a bare scalar or a timestamp).
    #[error("cannot ignore field `{0}`: the compared shape has no named fields")]
    ShapeHasNoFields(String),

    /// An excluded field name does not occur anywhere in the compared shape.
    #[error("ignored field `{0}` does not exist in the compared shape")]
    UnknownField(String),
}

impl UsageError {
    pub fn shape_has_no_fields(field: impl Into<String>) -> Self {
        Self::ShapeHasNoFields(field.into())
    }

    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField(field.into())
    }
}
