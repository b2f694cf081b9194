//! Applier error types

use std::fmt;
use crate::decomposer::DecomposeError;

/// Errors that can occur while applying a modifier to a measure
#[derive(Debug)]
pub enum ApplyError {
    /// The chart has no dimensions to normalize over
    NoDimensions,
    /// The respected dimension is not in the chart
    PrimaryDimensionOutOfRange {
        index: usize,
        dimension_count: usize,
    },
    /// A field selection without a field
    MissingSelectionField,
    /// The stored expression could not be taken apart
    Decompose(DecomposeError),
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDimensions => {
                write!(f, "Normalization needs at least one dimension")
            }
            Self::PrimaryDimensionOutOfRange { index, dimension_count } => {
                write!(
                    f,
                    "Primary dimension {} is out of range for a chart with {} dimension(s)",
                    index, dimension_count
                )
            }
            Self::MissingSelectionField => {
                write!(f, "Field selection scope requires a field")
            }
            Self::Decompose(err) => {
                write!(f, "Cannot recover base expression: {}", err)
            }
        }
    }
}

impl std::error::Error for ApplyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decompose(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DecomposeError> for ApplyError {
    fn from(err: DecomposeError) -> Self {
        ApplyError::Decompose(err)
    }
}
