//! Field and operator capabilities implemented by the per-resource
//! vocabularies.
//!
//! Each category of query concern carries a static wire prefix; the prefix
//! plus the rendered field name decide which parameters belong to the same
//! genus and therefore coalesce.

/// Keyword joined with an include field name to form an include-limit
/// parameter name, e.g. `Limit_Answers`.
pub const LIMIT_KEYWORD: &str = "Limit";

/// A field that can be filtered on.
pub trait FilterField {
    /// Wire name of the filter parameter category.
    const PREFIX: &'static str = "Filter";

    /// Wire key of the field, e.g. `ProductId`.
    fn key(&self) -> &'static str;
}

/// A field that results can be sorted by.
pub trait SortField {
    /// Wire name of the sort parameter category.
    const PREFIX: &'static str = "Sort";

    /// Wire key of the field.
    fn key(&self) -> &'static str;
}

/// A related resource that can be included with the results.
pub trait IncludeField {
    /// Wire name of the include parameter category.
    const PREFIX: &'static str = "Include";

    /// Wire key of the included resource, e.g. `Answers`.
    fn key(&self) -> &'static str;
}

/// A content type that statistics can be requested for.
pub trait StatField {
    /// Wire name of the statistics parameter category.
    const PREFIX: &'static str = "Stats";

    /// Wire key of the content type, e.g. `Reviews`.
    fn key(&self) -> &'static str;
}

/// A relational comparison operator usable inside a filter expression.
pub trait FilterOperator {
    /// Wire token of the operator, e.g. `eq`.
    fn key(&self) -> &'static str;
}
