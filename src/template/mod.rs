//! Decorated expression template (noun module)
//!
//! Typed form of a normalized expression: the generated clauses around the
//! user's expression. Rendering produces the evaluator text; matching takes
//! the same template apart again.

mod decorated;

pub use decorated::{DecoratedExpression, TemplateMismatch, SPACER};
