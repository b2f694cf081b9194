//! Field name and numeric eligibility resolution

use crate::model::{Dimension, FieldEntry, ModifierContext, LibraryItems};

/// Resolve the field backing a dimension
///
/// Library dimensions resolve through the registry; drill-down dimensions
/// resolve to their first field. Returns `None` when no field def is found.
pub fn dimension_field_name<'a>(dimension: &'a Dimension, library: &'a LibraryItems) -> Option<&'a str> {
    if let Some(id) = dimension.library_id.as_deref() {
        if let Some(item) = library.get(id) {
            if let Some(name) = item.dim.field_defs.first() {
                return Some(name.as_str());
            }
        }
    }
    dimension.def.field_defs.first().map(String::as_str)
}

/// Whether the dimension at `position` is backed by a numeric field
pub fn is_numeric_dimension(ctx: &ModifierContext<'_>, position: usize) -> bool {
    let Some(dimension) = ctx.properties.dimensions().get(position) else {
        return false;
    };
    let entry: Option<&FieldEntry> = match dimension_field_name(dimension, ctx.library_items) {
        Some(name) => ctx.field_list.get_field(name),
        // Nothing to match by name; the field list runs parallel to the dimensions
        None => ctx.field_list.get_position(position),
    };
    entry.is_some_and(FieldEntry::is_numeric)
}

/// Positions of the dimensions that group the `Aggr` construct, in order
pub fn numeric_dimension_positions(ctx: &ModifierContext<'_>) -> Vec<usize> {
    (0..ctx.dimension_count())
        .filter(|&i| is_numeric_dimension(ctx, i))
        .collect()
}
