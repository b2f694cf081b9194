//! Clause text generation
//!
//! The emitted tokens are read by the downstream evaluator and must be
//! reproduced exactly.

use crate::model::{DimensionalScope, SelectionScope};

/// Set expression selecting every record, ignoring selections
pub const DISREGARD_SELECTIONS: &str = "{1}";

/// Qualifier aggregating across all dimension values
pub const TOTAL: &str = "Total";

/// `{1}` when all selections are ignored
pub fn selection_disregard_clause(scope: &SelectionScope) -> &'static str {
    match scope {
        SelectionScope::IgnoreAllSelections => DISREGARD_SELECTIONS,
        _ => "",
    }
}

/// `{$<[field]={'value'}>}` when filtering to one field value
///
/// `field` and `value` are inserted as given. Callers that allow `]` or `'`
/// in them should pass them through [`escape_field_name`] and
/// [`escape_literal`] first.
pub fn field_selection_clause(scope: &SelectionScope) -> String {
    match scope {
        SelectionScope::SelectField { field, value } => {
            format!("{{$<[{}]={{'{}'}}>}}", field, value)
        }
        _ => String::new(),
    }
}

/// The set expression for whichever selection scope is configured
pub fn selection_clause(scope: &SelectionScope) -> String {
    match scope {
        SelectionScope::CurrentSelection => String::new(),
        SelectionScope::SelectField { .. } => field_selection_clause(scope),
        SelectionScope::IgnoreAllSelections => selection_disregard_clause(scope).to_string(),
    }
}

/// `Total` unless every dimension is respected
///
/// Respecting the only dimension of a one-dimension chart is the same as
/// respecting all of them, so no qualifier is emitted then.
pub fn total_clause(scope: &DimensionalScope, dimension_count: usize) -> &'static str {
    match scope {
        DimensionalScope::RespectOne { .. } if dimension_count > 1 => TOTAL,
        DimensionalScope::DisregardAll => TOTAL,
        _ => "",
    }
}

/// `<[field of primary dimension]>` when one of several dimensions is respected
pub fn selected_dimension_clause(scope: &DimensionalScope, dimension_count: usize) -> String {
    match scope {
        DimensionalScope::RespectOne { dimension } if dimension_count > 1 => {
            format!("<{}>", field_reference(*dimension))
        }
        _ => String::new(),
    }
}

/// Bracketed reference to the field behind the dimension at `position`
///
/// The field is looked up by the evaluator at run time. Its `]` characters
/// are doubled so the reference survives inside another bracket expression.
pub fn field_reference(position: usize) -> String {
    format!("[$(=Replace(GetObjectField({}),']',']]'))]", position)
}

/// Double `]` so a name can sit inside `[...]`
pub fn escape_field_name(name: &str) -> String {
    name.replace(']', "]]")
}

/// Double `'` so a value can sit inside `'...'`
pub fn escape_literal(value: &str) -> String {
    value.replace('\'', "''")
}
