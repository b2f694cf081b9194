//! Dimension resolver (verb module)
//!
//! Resolves each chart dimension to its field and decides which dimensions
//! take part in the `Aggr` grouping.

mod resolve;

pub use resolve::{dimension_field_name, is_numeric_dimension, numeric_dimension_positions};
