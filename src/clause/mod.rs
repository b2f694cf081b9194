//! Clause generators (verb module)
//!
//! Pure functions producing the fixed text fragments of a normalized
//! expression. Each returns an empty string when its clause does not apply.

mod generate;

pub use generate::{
    selection_disregard_clause,
    field_selection_clause,
    selection_clause,
    total_clause,
    selected_dimension_clause,
    field_reference,
    escape_field_name,
    escape_literal,
    DISREGARD_SELECTIONS,
    TOTAL,
};
