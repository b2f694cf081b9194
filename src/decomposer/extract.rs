//! Recovery of the user expression

use tracing::{debug, warn};

use crate::composer::build_template;
use crate::model::ModifierContext;
use super::error::DecomposeError;

/// Recover the expression that [`generate_expression`] embedded in `output`
///
/// The clauses are regenerated from `ctx` and matched against `output`, so
/// `ctx` must equal the context used for generation.
///
/// [`generate_expression`]: crate::composer::generate_expression
pub fn extract_input_expression(output: &str, ctx: &ModifierContext<'_>) -> Result<String, DecomposeError> {
    let template = build_template("", ctx);
    match template.match_expression(output) {
        Ok(expression) => {
            debug!(len = expression.len(), "extracted input expression");
            Ok(expression.to_string())
        }
        Err(reason) => {
            warn!(%reason, "normalized expression does not match configuration");
            Err(reason.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::generate_expression;
    use crate::model::{
        Dimension, DimensionAndFieldList, DimensionalScope, FieldEntry, HypercubeProperties,
        LibraryItems, NormalizationModifier, SelectionScope,
    };
    use crate::template::TemplateMismatch;

    #[test]
    fn test_extract_after_generate() {
        let props: HypercubeProperties =
            vec![Dimension::with_fields(["dim1"]), Dimension::with_fields(["dim2"])].into();
        let fields: DimensionAndFieldList =
            vec![FieldEntry::new("dim1", ["$numeric"]), FieldEntry::new("dim2", ["$numeric"])].into();
        let library = LibraryItems::default();
        let modifier = NormalizationModifier::new(
            SelectionScope::IgnoreAllSelections,
            DimensionalScope::RespectOne { dimension: 1 },
        );
        let ctx = ModifierContext::new(&modifier, &props, &library, &fields);

        let output = generate_expression("Sum(Sales) / Count(Orders)", &ctx);
        assert_eq!(
            extract_input_expression(&output, &ctx).unwrap(),
            "Sum(Sales) / Count(Orders)"
        );
    }

    #[test]
    fn test_extract_with_other_configuration_fails() {
        let props: HypercubeProperties =
            vec![Dimension::with_fields(["dim1"]), Dimension::with_fields(["dim2"])].into();
        let fields: DimensionAndFieldList =
            vec![FieldEntry::new("dim1", ["$numeric"]), FieldEntry::new("dim2", ["$numeric"])].into();
        let library = LibraryItems::default();
        let generated_with = NormalizationModifier::new(
            SelectionScope::IgnoreAllSelections,
            DimensionalScope::DisregardAll,
        );
        let extracted_with = NormalizationModifier::new(
            SelectionScope::CurrentSelection,
            DimensionalScope::DisregardAll,
        );
        let ctx = ModifierContext::new(&generated_with, &props, &library, &fields);
        let output = generate_expression("Sum(Sales)", &ctx);

        let err = extract_input_expression(&output, &ctx.with_modifier(&extracted_with)).unwrap_err();
        assert_eq!(err, DecomposeError::SkeletonMismatch(TemplateMismatch::Middle));
    }

    #[test]
    fn test_extract_plain_expression_fails() {
        let props = HypercubeProperties::default();
        let fields = DimensionAndFieldList::default();
        let library = LibraryItems::default();
        let modifier = NormalizationModifier::default();
        let ctx = ModifierContext::new(&modifier, &props, &library, &fields);

        assert!(matches!(
            extract_input_expression("Sum(Sales)", &ctx),
            Err(DecomposeError::SkeletonMismatch(TemplateMismatch::Prefix))
        ));
    }
}
