//! Decomposer errors

use std::fmt;
use crate::template::TemplateMismatch;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecomposeError {
    /// The text was not generated under this configuration
    SkeletonMismatch(TemplateMismatch),
    /// Numerator and denominator embed different expressions
    InconsistentExpression,
}

impl fmt::Display for DecomposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecomposeError::SkeletonMismatch(reason) => {
                write!(f, "Expression does not match the modifier configuration: {}", reason)
            }
            DecomposeError::InconsistentExpression => {
                write!(f, "Numerator and denominator embed different expressions")
            }
        }
    }
}

impl std::error::Error for DecomposeError {}

impl From<TemplateMismatch> for DecomposeError {
    fn from(reason: TemplateMismatch) -> Self {
        match reason {
            TemplateMismatch::Copies => DecomposeError::InconsistentExpression,
            other => DecomposeError::SkeletonMismatch(other),
        }
    }
}
