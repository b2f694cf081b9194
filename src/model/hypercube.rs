//! Hypercube definition types
//!
//! Only the parts of the visualization properties tree that the modifier reads.

use serde::Deserialize;

/// Root of the visualization properties
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HypercubeProperties {
    #[serde(rename = "qHyperCubeDef", default)]
    pub hypercube: HyperCubeDef,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HyperCubeDef {
    #[serde(rename = "qDimensions", default)]
    pub dimensions: Vec<Dimension>,
}

/// A chart dimension, either inline or a reference to a library item
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dimension {
    #[serde(rename = "qLibraryId")]
    pub library_id: Option<String>,
    #[serde(rename = "qDef", default)]
    pub def: DimensionDef,
}

/// Inline dimension definition
///
/// More than one field def means a drill-down (grouped) dimension.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DimensionDef {
    #[serde(rename = "qFieldDefs", default)]
    pub field_defs: Vec<String>,
    #[serde(rename = "qSortCriterias", default)]
    pub sort_criterias: Vec<SortCriteria>,
}

/// Sort settings carried by a dimension (not used when building expressions)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SortCriteria {
    #[serde(rename = "qSortByExpression", default)]
    pub by_expression: i32,
    #[serde(rename = "qSortByNumeric", default)]
    pub by_numeric: i32,
    #[serde(rename = "qSortByAscii", default)]
    pub by_ascii: i32,
}

impl HypercubeProperties {
    pub fn dimensions(&self) -> &[Dimension] {
        &self.hypercube.dimensions
    }

    pub fn dimension_count(&self) -> usize {
        self.hypercube.dimensions.len()
    }
}

impl Dimension {
    /// Inline dimension over the given fields
    pub fn with_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Dimension {
            library_id: None,
            def: DimensionDef {
                field_defs: fields.into_iter().map(Into::into).collect(),
                sort_criterias: Vec::new(),
            },
        }
    }

    /// Dimension that refers to a library item
    pub fn library(id: impl Into<String>) -> Self {
        Dimension {
            library_id: Some(id.into()),
            def: DimensionDef::default(),
        }
    }

    /// Whether this dimension groups several fields
    pub fn is_drill_down(&self) -> bool {
        self.def.field_defs.len() > 1
    }
}

impl From<Vec<Dimension>> for HypercubeProperties {
    fn from(dimensions: Vec<Dimension>) -> Self {
        HypercubeProperties {
            hypercube: HyperCubeDef { dimensions },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_properties() {
        let json = r#"{
            "qHyperCubeDef": {
                "qDimensions": [
                    {"qDef": {"qFieldDefs": ["dim1"], "qSortCriterias": [{"qSortByExpression": 0, "qSortByNumeric": 0, "qSortByAscii": 0}]}},
                    {"qLibraryId": "libId"},
                    {"qDef": {"qFieldDefs": ["Year", "Month"]}}
                ]
            }
        }"#;
        let props: HypercubeProperties = serde_json::from_str(json).unwrap();
        assert_eq!(props.dimension_count(), 3);
        assert_eq!(props.dimensions()[0].def.field_defs, vec!["dim1"]);
        assert_eq!(props.dimensions()[0].def.sort_criterias.len(), 1);
        assert_eq!(props.dimensions()[1].library_id.as_deref(), Some("libId"));
        assert!(props.dimensions()[1].def.field_defs.is_empty());
        assert!(props.dimensions()[2].is_drill_down());
    }

    #[test]
    fn test_missing_hypercube_is_empty() {
        let props: HypercubeProperties = serde_json::from_str("{}").unwrap();
        assert_eq!(props.dimension_count(), 0);
    }
}
