//! Context parser (verb module)
//!
//! Loads a modifier together with the chart metadata it is applied to.
//!
//! ```yaml
//! modifier:
//!   selectionScope: 0
//!   dimensionalScope: 0
//!   primaryDimension: 0
//! properties:
//!   qHyperCubeDef:
//!     qDimensions:
//!       - qDef: { qFieldDefs: [dim1] }
//! libraryItemsProps:
//!   libId:
//!     qDim: { qFieldDefs: [libDim] }
//! dimensionAndFieldList:
//!   fieldList:
//!     - { qName: dim1, qTags: [$numeric] }
//! ```

mod error;

use serde::Deserialize;
use std::path::Path;
use crate::model::{
    DimensionAndFieldList, HypercubeProperties, LibraryItems, ModifierContext, NormalizationModifier,
};

pub use error::ParseError;

/// Owned modifier context, as loaded from a file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextDef {
    #[serde(default)]
    pub modifier: NormalizationModifier,
    #[serde(default)]
    pub properties: HypercubeProperties,
    #[serde(rename = "libraryItemsProps", default)]
    pub library_items: LibraryItems,
    #[serde(default)]
    pub dimension_and_field_list: DimensionAndFieldList,
}

impl ContextDef {
    /// Borrow as the context used by generation and extraction
    pub fn context(&self) -> ModifierContext<'_> {
        ModifierContext::new(
            &self.modifier,
            &self.properties,
            &self.library_items,
            &self.dimension_and_field_list,
        )
    }
}

/// Parse a context from a YAML (or JSON) file
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ContextDef, ParseError> {
    parse_str(&read_file(path.as_ref())?)
}

/// Parse a context from a JSON file
pub fn parse_json_file<P: AsRef<Path>>(path: P) -> Result<ContextDef, ParseError> {
    parse_json(&read_file(path.as_ref())?)
}

fn read_file(path: &Path) -> Result<String, ParseError> {
    std::fs::read_to_string(path).map_err(|e| ParseError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

/// Parse a context from a YAML string
pub fn parse_str(yaml: &str) -> Result<ContextDef, ParseError> {
    serde_yaml::from_str(yaml).map_err(ParseError::from)
}

/// Parse a context from a JSON string
pub fn parse_json(json: &str) -> Result<ContextDef, ParseError> {
    serde_json::from_str(json).map_err(ParseError::from)
}

/// Parse the visualization properties alone from JSON
pub fn parse_properties(json: &str) -> Result<HypercubeProperties, ParseError> {
    serde_json::from_str(json).map_err(ParseError::from)
}
