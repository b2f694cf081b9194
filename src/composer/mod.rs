//! Expression composer (verb module)
//!
//! User expression + modifier context → normalized expression text.

mod compose;

pub use compose::{build_template, generate_expression};
