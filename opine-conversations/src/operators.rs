//! Relational operators usable inside filter expressions.

use opine_query::field::FilterOperator;

/// The relational comparators accepted by the display API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationalOperator {
    /// Equal to.
    EqualTo,
    /// Not equal to.
    NotEqualTo,
    /// Greater than.
    GreaterThan,
    /// Greater than or equal to.
    GreaterThanOrEqualTo,
    /// Less than.
    LessThan,
    /// Less than or equal to.
    LessThanOrEqualTo,
}

impl FilterOperator for RelationalOperator {
    fn key(&self) -> &'static str {
        match self {
            Self::EqualTo => "eq",
            Self::NotEqualTo => "neq",
            Self::GreaterThan => "gt",
            Self::GreaterThanOrEqualTo => "gte",
            Self::LessThan => "lt",
            Self::LessThanOrEqualTo => "lte",
        }
    }
}
