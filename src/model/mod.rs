//! Modifier model types (nouns)
//!
//! These types represent the parsed visualization properties.

mod context;
mod field_list;
mod hypercube;
mod library;
mod measure;
mod modifier;

pub use context::ModifierContext;
pub use field_list::{DimensionAndFieldList, FieldEntry, NUMERIC_TAG};
pub use hypercube::{HypercubeProperties, HyperCubeDef, Dimension, DimensionDef, SortCriteria};
pub use library::{LibraryItems, LibraryItem, LibraryDimension};
pub use measure::{Measure, MeasureDef, BaseDef};
pub use modifier::{NormalizationModifier, SelectionScope, DimensionalScope, ScopeCodeError};
