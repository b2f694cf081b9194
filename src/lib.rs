//! exprmod - Normalization modifiers for aggregation expressions
//!
//! This library provides:
//! - Modifier and chart metadata types (NormalizationModifier, HypercubeProperties, etc.)
//! - Context parsing from YAML/JSON properties
//! - Clause generation (selection, total, selected dimension)
//! - Normalized expression generation
//! - Exact recovery of the user expression from generated text
//! - Measure lifecycle (apply, refresh, remove)
//!
//! # Architecture
//!
//! **Noun modules** (data structures):
//! - `model/` - modifier configuration and chart metadata
//! - `template/` - typed decorated expression (DecoratedExpression)
//!
//! **Verb modules** (transformations):
//! - `parser/` - YAML/JSON → ContextDef
//! - `resolver/` - Dimension → field name, numeric eligibility
//! - `clause/` - scope configuration → clause text
//! - `composer/` - expression + context → normalized expression
//! - `decomposer/` - normalized expression + context → expression
//! - `applier/` - Measure + context → decorated Measure
//!
//! # Example
//!
//! ```ignore
//! use exprmod::{parser, generate_expression, extract_input_expression};
//!
//! let def = parser::parse_file("chart.yaml")?;
//! let ctx = def.context();
//! let output = generate_expression("Sum(Sales)", &ctx);
//! assert_eq!(extract_input_expression(&output, &ctx)?, "Sum(Sales)");
//! ```

pub mod model;
pub mod template;
pub mod parser;
pub mod resolver;
pub mod clause;
pub mod composer;
pub mod decomposer;
pub mod applier;

// Re-export commonly used types
pub use model::{
    NormalizationModifier, SelectionScope, DimensionalScope, HypercubeProperties, Dimension,
    LibraryItems, DimensionAndFieldList, FieldEntry, Measure, ModifierContext,
};
pub use template::DecoratedExpression;
pub use parser::{ContextDef, ParseError};
pub use composer::generate_expression;
pub use decomposer::{extract_input_expression, DecomposeError};
pub use applier::ApplyError;
