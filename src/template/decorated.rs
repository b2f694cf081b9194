//! Rendering and structural matching of decorated expressions

use std::fmt;

/// Full-width space delimiting the embedded user expression
pub const SPACER: char = '\u{3000}';

/// A normalized expression
///
/// Renders as
///
/// ```text
///  (␣E␣) / Sum(S T<D> Aggr(S  (␣E␣) , A1, A2))
/// ```
///
/// where `␣` is [`SPACER`], `S` the selection clause, `T` the total clause,
/// `<D>` the selected dimension clause and `A1, A2` the grouping arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoratedExpression {
    pub selection: String,
    pub total: String,
    pub dimension: String,
    pub expression: String,
    pub aggr_args: Vec<String>,
}

impl DecoratedExpression {
    /// Text before the first copy of the expression
    fn prefix() -> String {
        format!(" ({}", SPACER)
    }

    /// Text between the two copies of the expression
    fn middle(&self) -> String {
        format!(
            "{sp}) / Sum({sel} {total}{dim} Aggr({sel}  ({sp}",
            sp = SPACER,
            sel = self.selection,
            total = self.total,
            dim = self.dimension,
        )
    }

    /// Text after the second copy of the expression
    fn suffix(&self) -> String {
        format!("{}) , {}))", SPACER, self.aggr_args.join(", "))
    }

    /// The wrapped expression used as numerator and inside `Aggr`
    pub fn numerator(&self) -> String {
        format!(" ({sp}{}{sp}) ", self.expression, sp = SPACER)
    }

    /// The `Sum(...)` denominator
    pub fn denominator(&self) -> String {
        format!(
            "Sum({sel} {total}{dim} Aggr({sel} {num}, {args}))",
            sel = self.selection,
            total = self.total,
            dim = self.dimension,
            num = self.numerator(),
            args = self.aggr_args.join(", "),
        )
    }

    /// Recover the embedded expression from `text`
    ///
    /// `self` supplies the clauses; its `expression` is ignored. The text must
    /// be `prefix + E + middle + E + suffix` with both copies of `E` equal.
    /// Matching goes by length, so `E` may contain anything, the spacer included.
    pub fn match_expression<'t>(&self, text: &'t str) -> Result<&'t str, TemplateMismatch> {
        let prefix = Self::prefix();
        let middle = self.middle();
        let suffix = self.suffix();

        let inner = text
            .strip_prefix(prefix.as_str())
            .ok_or(TemplateMismatch::Prefix)?
            .strip_suffix(suffix.as_str())
            .ok_or(TemplateMismatch::Suffix)?;

        let Some(doubled) = inner.len().checked_sub(middle.len()) else {
            return Err(TemplateMismatch::Length);
        };
        if doubled % 2 != 0 {
            return Err(TemplateMismatch::Length);
        }
        let half = doubled / 2;

        let first = inner.get(..half).ok_or(TemplateMismatch::Length)?;
        let rest = inner.get(half..).ok_or(TemplateMismatch::Length)?;
        let second = rest
            .strip_prefix(middle.as_str())
            .ok_or(TemplateMismatch::Middle)?;

        if first != second {
            return Err(TemplateMismatch::Copies);
        }
        Ok(first)
    }
}

impl fmt::Display for DecoratedExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/ {}", self.numerator(), self.denominator())
    }
}

/// Where a string departed from the expected template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateMismatch {
    Prefix,
    Suffix,
    Middle,
    Length,
    Copies,
}

impl fmt::Display for TemplateMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateMismatch::Prefix => write!(f, "missing numerator opening"),
            TemplateMismatch::Suffix => write!(f, "aggregation arguments differ"),
            TemplateMismatch::Middle => write!(f, "denominator clauses differ"),
            TemplateMismatch::Length => write!(f, "embedded expressions cannot be aligned"),
            TemplateMismatch::Copies => write!(f, "the two embedded expressions differ"),
        }
    }
}
