//! Normalization modifier configuration

use serde::Deserialize;
use std::fmt;

/// Which selections the normalizing denominator respects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionScope {
    /// Respect the current selections (code 0)
    CurrentSelection,
    /// Filter to a single value of one field (code 1)
    SelectField { field: String, value: String },
    /// Ignore all selections (code 2)
    IgnoreAllSelections,
}

/// Which chart dimensions the normalizing denominator respects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionalScope {
    /// Respect only the dimension at `dimension` (code 0)
    RespectOne { dimension: usize },
    /// Respect every dimension (code 1)
    RespectAll,
    /// Disregard every dimension (code 2)
    DisregardAll,
}

impl SelectionScope {
    /// Integer code used by the properties tree
    pub fn code(&self) -> u8 {
        match self {
            SelectionScope::CurrentSelection => 0,
            SelectionScope::SelectField { .. } => 1,
            SelectionScope::IgnoreAllSelections => 2,
        }
    }
}

impl DimensionalScope {
    /// Integer code used by the properties tree
    pub fn code(&self) -> u8 {
        match self {
            DimensionalScope::RespectOne { .. } => 0,
            DimensionalScope::RespectAll => 1,
            DimensionalScope::DisregardAll => 2,
        }
    }

    /// Index of the respected dimension, if any
    pub fn primary_dimension(&self) -> Option<usize> {
        match self {
            DimensionalScope::RespectOne { dimension } => Some(*dimension),
            _ => None,
        }
    }
}

/// A normalization modifier attached to a measure
///
/// Deserializes from the integer-coded properties form:
///
/// ```yaml
/// type: normalization
/// disabled: false
/// primaryDimension: 0
/// dimensionalScope: 0
/// selectionScope: 1
/// field: Product
/// value: Jeans
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawModifier")]
pub struct NormalizationModifier {
    pub disabled: bool,
    pub selection_scope: SelectionScope,
    pub dimensional_scope: DimensionalScope,
}

impl Default for NormalizationModifier {
    fn default() -> Self {
        NormalizationModifier {
            disabled: false,
            selection_scope: SelectionScope::CurrentSelection,
            dimensional_scope: DimensionalScope::RespectOne { dimension: 0 },
        }
    }
}

impl NormalizationModifier {
    pub fn new(selection_scope: SelectionScope, dimensional_scope: DimensionalScope) -> Self {
        NormalizationModifier {
            disabled: false,
            selection_scope,
            dimensional_scope,
        }
    }

    /// Whether the modifier should decorate the measure
    pub fn is_active(&self) -> bool {
        !self.disabled
    }
}

/// Properties-tree shape of the modifier, before scope codes are checked
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawModifier {
    #[serde(default)]
    disabled: bool,
    #[serde(default)]
    primary_dimension: usize,
    #[serde(default)]
    dimensional_scope: u8,
    #[serde(default)]
    selection_scope: u8,
    #[serde(default)]
    field: String,
    #[serde(default)]
    value: String,
}

/// Error when a scope code is outside the known range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeCodeError {
    pub axis: &'static str,
    pub code: u8,
}

impl fmt::Display for ScopeCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid {} code {}: expected 0, 1 or 2", self.axis, self.code)
    }
}

impl std::error::Error for ScopeCodeError {}

impl TryFrom<RawModifier> for NormalizationModifier {
    type Error = ScopeCodeError;

    fn try_from(raw: RawModifier) -> Result<Self, Self::Error> {
        let selection_scope = match raw.selection_scope {
            0 => SelectionScope::CurrentSelection,
            1 => SelectionScope::SelectField {
                field: raw.field,
                value: raw.value,
            },
            2 => SelectionScope::IgnoreAllSelections,
            code => return Err(ScopeCodeError { axis: "selectionScope", code }),
        };
        let dimensional_scope = match raw.dimensional_scope {
            0 => DimensionalScope::RespectOne {
                dimension: raw.primary_dimension,
            },
            1 => DimensionalScope::RespectAll,
            2 => DimensionalScope::DisregardAll,
            code => return Err(ScopeCodeError { axis: "dimensionalScope", code }),
        };
        Ok(NormalizationModifier {
            disabled: raw.disabled,
            selection_scope,
            dimensional_scope,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_select_field() {
        let yaml = r#"
type: normalization
disabled: false
primaryDimension: 1
dimensionalScope: 0
selectionScope: 1
outputExpression: ''
field: Product
value: Jeans
"#;
        let modifier: NormalizationModifier = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            modifier.selection_scope,
            SelectionScope::SelectField {
                field: "Product".to_string(),
                value: "Jeans".to_string(),
            }
        );
        assert_eq!(modifier.dimensional_scope, DimensionalScope::RespectOne { dimension: 1 });
        assert!(modifier.is_active());
    }

    #[test]
    fn test_field_ignored_outside_select_field() {
        let json = r#"{"selectionScope": 2, "dimensionalScope": 2, "field": "Product", "value": "Jeans"}"#;
        let modifier: NormalizationModifier = serde_json::from_str(json).unwrap();
        assert_eq!(modifier.selection_scope, SelectionScope::IgnoreAllSelections);
        assert_eq!(modifier.dimensional_scope, DimensionalScope::DisregardAll);
        assert_eq!(modifier.dimensional_scope.primary_dimension(), None);
    }

    #[test]
    fn test_unknown_scope_code_rejected() {
        let result: Result<NormalizationModifier, _> =
            serde_json::from_str(r#"{"selectionScope": 3}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("selectionScope"), "{}", err);

        let result: Result<NormalizationModifier, _> =
            serde_json::from_str(r#"{"dimensionalScope": 7}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_codes_round_trip() {
        let modifier = NormalizationModifier::new(
            SelectionScope::SelectField { field: "A".into(), value: "b".into() },
            DimensionalScope::RespectAll,
        );
        assert_eq!(modifier.selection_scope.code(), 1);
        assert_eq!(modifier.dimensional_scope.code(), 1);
        assert_eq!(NormalizationModifier::default().dimensional_scope.code(), 0);
    }
}
