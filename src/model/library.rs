//! Library (master item) registry

use serde::Deserialize;
use std::collections::HashMap;

/// Library items keyed by library id
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct LibraryItems {
    pub items: HashMap<String, LibraryItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LibraryItem {
    #[serde(rename = "qDim", default)]
    pub dim: LibraryDimension,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LibraryDimension {
    #[serde(rename = "qFieldDefs", default)]
    pub field_defs: Vec<String>,
}

impl LibraryItems {
    pub fn get(&self, id: &str) -> Option<&LibraryItem> {
        self.items.get(id)
    }

    /// Register a library dimension over the given fields
    pub fn insert_dimension<I, S>(&mut self, id: impl Into<String>, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let dim = LibraryDimension {
            field_defs: fields.into_iter().map(Into::into).collect(),
        };
        self.items.insert(id.into(), LibraryItem { dim });
    }
}
