//! Configuration context shared by generation and extraction

use super::field_list::DimensionAndFieldList;
use super::hypercube::HypercubeProperties;
use super::library::LibraryItems;
use super::modifier::NormalizationModifier;

/// Everything besides the expression that decides the decorated text
///
/// Generation and extraction must see equal contexts for the round trip to hold.
#[derive(Debug, Clone, Copy)]
pub struct ModifierContext<'a> {
    pub modifier: &'a NormalizationModifier,
    pub properties: &'a HypercubeProperties,
    pub library_items: &'a LibraryItems,
    pub field_list: &'a DimensionAndFieldList,
}

impl<'a> ModifierContext<'a> {
    pub fn new(
        modifier: &'a NormalizationModifier,
        properties: &'a HypercubeProperties,
        library_items: &'a LibraryItems,
        field_list: &'a DimensionAndFieldList,
    ) -> Self {
        ModifierContext {
            modifier,
            properties,
            library_items,
            field_list,
        }
    }

    pub fn dimension_count(&self) -> usize {
        self.properties.dimension_count()
    }

    /// Same metadata, different modifier
    pub fn with_modifier(self, modifier: &'a NormalizationModifier) -> Self {
        ModifierContext { modifier, ..self }
    }
}
