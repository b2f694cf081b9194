//! Normalized expression generation

use tracing::{debug, trace};

use crate::clause::{field_reference, selected_dimension_clause, selection_clause, total_clause};
use crate::model::ModifierContext;
use crate::resolver::numeric_dimension_positions;
use crate::template::DecoratedExpression;

/// Build the typed template for `expression` under `ctx`
pub fn build_template(expression: &str, ctx: &ModifierContext<'_>) -> DecoratedExpression {
    let dimension_count = ctx.dimension_count();
    let modifier = ctx.modifier;

    let aggr_args: Vec<String> = numeric_dimension_positions(ctx)
        .into_iter()
        .map(field_reference)
        .collect();
    trace!(dimension_count, numeric = aggr_args.len(), "resolved aggregation arguments");

    DecoratedExpression {
        selection: selection_clause(&modifier.selection_scope),
        total: total_clause(&modifier.dimensional_scope, dimension_count).to_string(),
        dimension: selected_dimension_clause(&modifier.dimensional_scope, dimension_count),
        expression: expression.to_string(),
        aggr_args,
    }
}

/// Wrap `expression` so it is divided by its total over the configured scope
///
/// The expression is embedded as-is; nothing about it is validated.
pub fn generate_expression(expression: &str, ctx: &ModifierContext<'_>) -> String {
    let output = build_template(expression, ctx).to_string();
    debug!(
        selection_scope = ctx.modifier.selection_scope.code(),
        dimensional_scope = ctx.modifier.dimensional_scope.code(),
        "generated normalized expression"
    );
    output
}
