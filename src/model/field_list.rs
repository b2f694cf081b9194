//! Dimension and field list types

use serde::Deserialize;

/// Tag marking a field whose values are numeric
pub const NUMERIC_TAG: &str = "$numeric";

/// Fields available to the chart, with their tags
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DimensionAndFieldList {
    #[serde(rename = "fieldList", default)]
    pub field_list: Vec<FieldEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldEntry {
    #[serde(rename = "qName")]
    pub name: String,
    #[serde(rename = "qTags", default)]
    pub tags: Vec<String>,
}

impl DimensionAndFieldList {
    /// Get a field entry by name
    pub fn get_field(&self, name: &str) -> Option<&FieldEntry> {
        self.field_list.iter().find(|f| f.name == name)
    }

    /// Field entry at the given position
    pub fn get_position(&self, index: usize) -> Option<&FieldEntry> {
        self.field_list.get(index)
    }
}

impl FieldEntry {
    pub fn new<I, S>(name: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldEntry {
            name: name.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Whether the field can be used as an `Aggr` grouping argument
    pub fn is_numeric(&self) -> bool {
        self.has_tag(NUMERIC_TAG)
    }
}

impl From<Vec<FieldEntry>> for DimensionAndFieldList {
    fn from(field_list: Vec<FieldEntry>) -> Self {
        DimensionAndFieldList { field_list }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_predicate() {
        let list: DimensionAndFieldList = serde_json::from_str(
            r#"{"fieldList": [
                {"qName": "Year", "qTags": ["$numeric", "$integer"]},
                {"qName": "Product", "qTags": ["$text", "$ascii"]},
                {"qName": "Untagged"}
            ]}"#,
        )
        .unwrap();
        assert!(list.get_field("Year").unwrap().is_numeric());
        assert!(!list.get_field("Product").unwrap().is_numeric());
        assert!(!list.get_field("Untagged").unwrap().is_numeric());
        assert!(list.get_field("Missing").is_none());
        assert_eq!(list.get_position(1).unwrap().name, "Product");
    }
}
