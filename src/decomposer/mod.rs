//! Expression decomposer (verb module)
//!
//! Normalized expression text + modifier context → user expression.

mod error;
mod extract;

pub use error::DecomposeError;
pub use extract::extract_input_expression;
