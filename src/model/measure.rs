//! Measure types carrying a modifier

use serde::Deserialize;
use super::modifier::NormalizationModifier;

/// A chart measure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Measure {
    #[serde(rename = "qDef", default)]
    pub def: MeasureDef,
}

/// Measure definition
///
/// `expression` is what the evaluator sees. Once a modifier has been applied,
/// `base` holds the user's own expression.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MeasureDef {
    #[serde(rename = "qDef", default)]
    pub expression: String,
    #[serde(default)]
    pub base: Option<BaseDef>,
    #[serde(default)]
    pub modifier: Option<NormalizationModifier>,
}

/// The user's expression before decoration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BaseDef {
    #[serde(rename = "qDef")]
    pub expression: String,
}

impl Measure {
    pub fn new(expression: impl Into<String>) -> Self {
        Measure {
            def: MeasureDef {
                expression: expression.into(),
                base: None,
                modifier: None,
            },
        }
    }

    pub fn with_modifier(mut self, modifier: NormalizationModifier) -> Self {
        self.def.modifier = Some(modifier);
        self
    }

    /// Expression currently evaluated for this measure
    pub fn expression(&self) -> &str {
        &self.def.expression
    }

    /// The user's expression: the stored base, else the current expression
    pub fn base_expression(&self) -> &str {
        self.def
            .base
            .as_ref()
            .map(|b| b.expression.as_str())
            .unwrap_or(&self.def.expression)
    }

    pub fn has_base(&self) -> bool {
        self.def.base.is_some()
    }
}
