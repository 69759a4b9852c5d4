//! Shape-level errors raised while decoding or validating a single shape.

use std::fmt;

/// Decode/validation failure for one encoded shape.
///
/// `index` is the position of the shape in the caller's input collection when known.
/// Codecs produce errors without an index and the engine relocates them with `at`.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// The variant tag is neither `Circle` nor `Rectangle`.
    UnrecognizedVariant { index: Option<usize>, tag: String },
    /// The shape violates a data-model invariant or its payload is malformed.
    InvalidShapeField {
        index: Option<usize>,
        field: &'static str,
        reason: String,
    },
}

impl ShapeError {
    pub(crate) fn unrecognized(tag: impl Into<String>) -> Self {
        Self::UnrecognizedVariant {
            index: None,
            tag: tag.into(),
        }
    }

    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidShapeField {
            index: None,
            field,
            reason: reason.into(),
        }
    }

    /// Attach the input position of the offending shape.
    pub fn at(self, at: usize) -> Self {
        match self {
            Self::UnrecognizedVariant { tag, .. } => Self::UnrecognizedVariant {
                index: Some(at),
                tag,
            },
            Self::InvalidShapeField { field, reason, .. } => Self::InvalidShapeField {
                index: Some(at),
                field,
                reason,
            },
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Self::UnrecognizedVariant { index, .. } | Self::InvalidShapeField { index, .. } => {
                *index
            }
        }
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(i) = self.index() {
            write!(f, "shape #{i}: ")?;
        }
        match self {
            Self::UnrecognizedVariant { tag, .. } => write!(f, "unrecognized variant `{tag}`"),
            Self::InvalidShapeField { field, reason, .. } => {
                write!(f, "invalid field `{field}`: {reason}")
            }
        }
    }
}

impl std::error::Error for ShapeError {}

/// Text that does not name a shape kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseKindError {
    pub input: String,
}

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown shape kind `{}` (expected circle or rectangle)",
            self.input
        )
    }
}

impl std::error::Error for ParseKindError {}
