//! Measure decoration lifecycle

use tracing::debug;

use crate::composer::generate_expression;
use crate::decomposer::extract_input_expression;
use crate::model::{
    BaseDef, DimensionalScope, HypercubeProperties, Measure, ModifierContext,
    NormalizationModifier, SelectionScope,
};
use super::error::ApplyError;

/// Whether a modifier is present and enabled
pub fn is_active(modifier: Option<&NormalizationModifier>) -> bool {
    modifier.is_some_and(NormalizationModifier::is_active)
}

/// Whether the chart can carry a normalization modifier
pub fn is_applicable(properties: &HypercubeProperties) -> bool {
    properties.dimension_count() > 0
}

/// Check the configuration against the chart
pub fn validate(modifier: &NormalizationModifier, dimension_count: usize) -> Result<(), ApplyError> {
    if dimension_count == 0 {
        return Err(ApplyError::NoDimensions);
    }
    if let DimensionalScope::RespectOne { dimension } = modifier.dimensional_scope {
        if dimension >= dimension_count {
            return Err(ApplyError::PrimaryDimensionOutOfRange {
                index: dimension,
                dimension_count,
            });
        }
    }
    if let SelectionScope::SelectField { field, .. } = &modifier.selection_scope {
        if field.is_empty() {
            return Err(ApplyError::MissingSelectionField);
        }
    }
    Ok(())
}

/// Decorate the measure's expression with `ctx.modifier`
///
/// The user's expression is kept in `base` the first time, so applying again
/// regenerates from it rather than nesting decorations. A measure that was
/// persisted decorated but without a base gets its base recovered through the
/// modifier it carries. A disabled modifier restores the user's expression
/// instead.
pub fn apply(measure: &mut Measure, ctx: &ModifierContext<'_>) -> Result<(), ApplyError> {
    recover_stored_base(measure, ctx);

    if !ctx.modifier.is_active() {
        debug!("modifier disabled, restoring base expression");
        remove(measure);
        measure.def.modifier = Some(ctx.modifier.clone());
        return Ok(());
    }
    validate(ctx.modifier, ctx.dimension_count())?;

    let base = measure.base_expression().to_string();
    measure.def.expression = generate_expression(&base, ctx);
    measure.def.base = Some(BaseDef { expression: base });
    measure.def.modifier = Some(ctx.modifier.clone());
    Ok(())
}

/// Recover `base` using the modifier stored on the measure, if any
///
/// Leaves the measure unchanged when the stored expression was not
/// generated with that modifier.
fn recover_stored_base(measure: &mut Measure, ctx: &ModifierContext<'_>) {
    if measure.has_base() {
        return;
    }
    let Some(stored) = measure.def.modifier.clone() else {
        return;
    };
    if let Err(err) = recover_base(measure, &ctx.with_modifier(&stored)) {
        debug!(%err, "stored expression is not decorated, keeping it as base");
    }
}

/// Regenerate the expression after the modifier or chart changed
///
/// Measures without a stored base are left untouched.
pub fn refresh(measure: &mut Measure, ctx: &ModifierContext<'_>) -> Result<(), ApplyError> {
    if !measure.has_base() {
        return Ok(());
    }
    apply(measure, ctx)
}

/// Restore the user's expression and drop the stored base
pub fn remove(measure: &mut Measure) {
    if let Some(base) = measure.def.base.take() {
        measure.def.expression = base.expression;
    }
}

/// Rebuild a missing `base` from the decorated expression
///
/// `ctx` must describe the configuration the expression was generated with.
pub fn recover_base(measure: &mut Measure, ctx: &ModifierContext<'_>) -> Result<(), ApplyError> {
    if measure.has_base() {
        return Ok(());
    }
    let expression = extract_input_expression(measure.expression(), ctx)?;
    measure.def.base = Some(BaseDef { expression });
    Ok(())
}
