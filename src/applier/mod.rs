//! Modifier applier (verb module)
//!
//! Keeps a measure's evaluated expression in step with its normalization
//! modifier: decorating it, refreshing it after configuration changes and
//! restoring the user's expression on removal.

mod apply;
mod error;

pub use apply::{apply, is_active, is_applicable, recover_base, refresh, remove, validate};
pub use error::ApplyError;
