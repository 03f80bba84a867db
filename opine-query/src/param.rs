//! The query-parameter composition engine.
//!
//! A [`Parameter`] is one query concern: a filter, a sort, an include, a
//! statistics request or a free-form custom field. Parameters of the same
//! *genus* (same variant, same rendered name) can be chained together through
//! their `next` link and render as a single comma-joined wire value; the
//! collection layer ([`crate::set::ParameterSet`]) guarantees at most one
//! chain per genus.
//!
//! Chains are exclusively owned and acyclic: every composition operation
//! consumes its operands by value and produces a new parameter, nothing is
//! ever mutated in place.

use smallvec::SmallVec;
use smol_str::{SmolStr, format_smolstr};

use crate::escape::escape;
use crate::field::{
    FilterField, FilterOperator, IncludeField, LIMIT_KEYWORD, SortField, StatField,
};
use crate::types::SortOrder;
use crate::value::ParameterValue;

/// Filter value list; most filters carry one or two values.
pub type ValueList = SmallVec<[ParameterValue; 4]>;

type Link = Option<Box<Parameter>>;

/// Variant tag of a [`Parameter`], one half of its genus identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    /// Free-form name/value pair.
    Custom,
    /// Field filter.
    Filter,
    /// Filter scoped to a related content type.
    FilterType,
    /// Related resource include.
    Include,
    /// Result limit for an included resource.
    IncludeLimit,
    /// Result ordering.
    Sort,
    /// Ordering scoped to a related content type.
    SortType,
    /// Statistics request for a content type.
    Stat,
}

/// The genus of a parameter: variant tag plus rendered name.
///
/// Two parameters represent the same kind of query concern, and therefore
/// coalesce rather than coexist, exactly when their genera are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Genus {
    /// Variant tag.
    pub kind: ParameterKind,
    /// Rendered parameter name.
    pub name: SmolStr,
}

/// One query concern, optionally chained to further concerns of the same
/// genus.
///
/// ```rust
/// use opine_query::Parameter;
/// # use opine_query::field::{FilterField, FilterOperator};
/// # #[derive(Clone, Copy)] struct ProductId;
/// # impl FilterField for ProductId { fn key(&self) -> &'static str { "ProductId" } }
/// # #[derive(Clone, Copy)] struct EqualTo;
/// # impl FilterOperator for EqualTo { fn key(&self) -> &'static str { "eq" } }
///
/// let filter = Parameter::filter(ProductId, EqualTo, ["test1"]);
/// assert_eq!(filter.name().as_str(), "Filter");
/// assert_eq!(filter.value(), "ProductId:eq:test1");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Parameter {
    /// Free-form name/value pair (`Search`, `Limit`, `Offset`, ...).
    Custom {
        /// Parameter name.
        field: SmolStr,
        /// Parameter value.
        value: ParameterValue,
        /// Chained concern of the same genus.
        next: Link,
    },
    /// Field filter, rendered `Filter=Field:op:v1,v2`.
    Filter {
        /// Category prefix, normally `Filter`.
        prefix: &'static str,
        /// Field wire key.
        field: &'static str,
        /// Operator wire token.
        op: &'static str,
        /// Comparison values; escaped and sorted at render time.
        values: ValueList,
        /// Chained concern of the same genus.
        next: Link,
    },
    /// Filter scoped to a related content type, rendered
    /// `Filter_Scope=Field:op:v1,v2`.
    FilterType {
        /// Category prefix, normally `Filter`.
        prefix: &'static str,
        /// Scoping content type wire key.
        scope: &'static str,
        /// Field wire key.
        field: &'static str,
        /// Operator wire token.
        op: &'static str,
        /// Comparison values; escaped and sorted at render time.
        values: ValueList,
        /// Chained concern of the same genus.
        next: Link,
    },
    /// Related resource include, rendered `Include=Answers,...`.
    Include {
        /// Category prefix, normally `Include`.
        prefix: &'static str,
        /// Included resource wire key.
        field: &'static str,
        /// Chained concern of the same genus.
        next: Link,
    },
    /// Per-include result limit, rendered `Limit_Answers=10`.
    IncludeLimit {
        /// Included resource wire key.
        field: &'static str,
        /// Maximum number of included results.
        limit: u16,
        /// Chained concern of the same genus.
        next: Link,
    },
    /// Result ordering, rendered `Sort=Field:asc`.
    Sort {
        /// Category prefix, normally `Sort`.
        prefix: &'static str,
        /// Field wire key.
        field: &'static str,
        /// Sort direction.
        order: SortOrder,
        /// Chained concern of the same genus.
        next: Link,
    },
    /// Ordering scoped to a related content type, rendered
    /// `Sort_Scope=Field:asc`.
    SortType {
        /// Category prefix, normally `Sort`.
        prefix: &'static str,
        /// Scoping content type wire key.
        scope: &'static str,
        /// Field wire key.
        field: &'static str,
        /// Sort direction.
        order: SortOrder,
        /// Chained concern of the same genus.
        next: Link,
    },
    /// Statistics request, rendered `Stats=Reviews`.
    Stat {
        /// Category prefix, normally `Stats`.
        prefix: &'static str,
        /// Content type wire key.
        field: &'static str,
        /// Chained concern of the same genus.
        next: Link,
    },
}

impl Parameter {
    /// Free-form name/value parameter.
    pub fn custom(field: impl Into<SmolStr>, value: impl Into<ParameterValue>) -> Self {
        Self::Custom {
            field: field.into(),
            value: value.into(),
            next: None,
        }
    }

    /// Field filter.
    pub fn filter<F, O, I, V>(field: F, op: O, values: I) -> Self
    where
        F: FilterField,
        O: FilterOperator,
        I: IntoIterator<Item = V>,
        V: Into<ParameterValue>,
    {
        Self::Filter {
            prefix: F::PREFIX,
            field: field.key(),
            op: op.key(),
            values: values.into_iter().map(Into::into).collect(),
            next: None,
        }
    }

    /// Filter scoped to a related content type.
    pub fn filter_type<S, F, O, I, V>(scope: S, field: F, op: O, values: I) -> Self
    where
        S: FilterField,
        F: FilterField,
        O: FilterOperator,
        I: IntoIterator<Item = V>,
        V: Into<ParameterValue>,
    {
        Self::FilterType {
            prefix: S::PREFIX,
            scope: scope.key(),
            field: field.key(),
            op: op.key(),
            values: values.into_iter().map(Into::into).collect(),
            next: None,
        }
    }

    /// Related resource include.
    pub fn include<F: IncludeField>(field: F) -> Self {
        Self::Include {
            prefix: F::PREFIX,
            field: field.key(),
            next: None,
        }
    }

    /// Per-include result limit.
    pub fn include_limit<F: IncludeField>(field: F, limit: u16) -> Self {
        Self::IncludeLimit {
            field: field.key(),
            limit,
            next: None,
        }
    }

    /// Result ordering.
    pub fn sort<F: SortField>(field: F, order: SortOrder) -> Self {
        Self::Sort {
            prefix: F::PREFIX,
            field: field.key(),
            order,
            next: None,
        }
    }

    /// Ordering scoped to a related content type.
    pub fn sort_type<S: SortField, F: SortField>(scope: S, field: F, order: SortOrder) -> Self {
        Self::SortType {
            prefix: S::PREFIX,
            scope: scope.key(),
            field: field.key(),
            order,
            next: None,
        }
    }

    /// Statistics request for a content type.
    pub fn stat<F: StatField>(field: F) -> Self {
        Self::Stat {
            prefix: F::PREFIX,
            field: field.key(),
            next: None,
        }
    }

    /// Variant tag.
    pub fn kind(&self) -> ParameterKind {
        match self {
            Self::Custom { .. } => ParameterKind::Custom,
            Self::Filter { .. } => ParameterKind::Filter,
            Self::FilterType { .. } => ParameterKind::FilterType,
            Self::Include { .. } => ParameterKind::Include,
            Self::IncludeLimit { .. } => ParameterKind::IncludeLimit,
            Self::Sort { .. } => ParameterKind::Sort,
            Self::SortType { .. } => ParameterKind::SortType,
            Self::Stat { .. } => ParameterKind::Stat,
        }
    }

    /// Rendered wire name of the parameter.
    pub fn name(&self) -> SmolStr {
        match self {
            Self::Custom { field, .. } => field.clone(),
            Self::Filter { prefix, .. } => SmolStr::new(prefix),
            Self::FilterType { prefix, scope, .. } => format_smolstr!("{prefix}_{scope}"),
            Self::Include { prefix, .. } => SmolStr::new(prefix),
            Self::IncludeLimit { field, .. } => format_smolstr!("{LIMIT_KEYWORD}_{field}"),
            Self::Sort { prefix, .. } => SmolStr::new(prefix),
            Self::SortType { prefix, scope, .. } => format_smolstr!("{prefix}_{scope}"),
            Self::Stat { prefix, .. } => SmolStr::new(prefix),
        }
    }

    /// The genus deciding whether two parameters coalesce.
    pub fn genus(&self) -> Genus {
        Genus {
            kind: self.kind(),
            name: self.name(),
        }
    }

    /// The parameter's own rendered value, ignoring its chain.
    pub fn peek(&self) -> String {
        match self {
            Self::Custom { value, .. } => escape(&value.render()),
            Self::Filter {
                field, op, values, ..
            }
            | Self::FilterType {
                field, op, values, ..
            } => filter_expression(field, op, values),
            Self::Include { field, .. } => (*field).to_owned(),
            Self::IncludeLimit { limit, .. } => limit.to_string(),
            Self::Sort { field, order, .. } | Self::SortType { field, order, .. } => {
                format!("{field}:{}", order.key())
            }
            Self::Stat { field, .. } => (*field).to_owned(),
        }
    }

    /// The full rendered value: the chain renders first, the parameter
    /// itself renders last.
    pub fn value(&self) -> String {
        match self.next() {
            Some(next) => format!("{},{}", next.value(), self.peek()),
            None => self.peek(),
        }
    }

    /// The chained parameter, if any.
    pub fn next(&self) -> Option<&Parameter> {
        match self {
            Self::Custom { next, .. }
            | Self::Filter { next, .. }
            | Self::FilterType { next, .. }
            | Self::Include { next, .. }
            | Self::IncludeLimit { next, .. }
            | Self::Sort { next, .. }
            | Self::SortType { next, .. }
            | Self::Stat { next, .. } => next.as_deref(),
        }
    }

    /// Every chain descendant, detached from its own chain.
    pub fn children(&self) -> Vec<Parameter> {
        let mut links = Vec::new();
        let mut cursor = self.next();
        while let Some(node) = cursor {
            links.push(node.detached());
            cursor = node.next();
        }
        links
    }

    /// Whether `other` and `self` represent the same kind of query concern.
    pub fn same_genus(&self, other: &Parameter) -> bool {
        self.kind() == other.kind() && self.name() == other.name()
    }

    /// Shallow equality: same genus and same full rendered value.
    pub fn value_eq(&self, other: &Parameter) -> bool {
        self.same_genus(other) && self.value() == other.value()
    }

    /// Structural equality over the whole chain.
    ///
    /// Same genus, same own value, same chain length — and, when both
    /// chains are non-empty, at least one link shared between them. The
    /// weak containment check is deliberate; see the crate documentation
    /// on compatibility.
    pub fn deep_equals(&self, other: &Parameter) -> bool {
        if !self.same_genus(other) {
            return false;
        }
        if self.peek() != other.peek() {
            return false;
        }
        let lhs = self.children();
        let rhs = other.children();
        if lhs.len() != rhs.len() {
            return false;
        }
        if lhs.is_empty() {
            return true;
        }
        lhs.iter()
            .any(|left| rhs.iter().any(|right| left.value_eq(right)))
    }

    /// For same-genus parameters whose rendered values are in a substring
    /// relation, the containing parameter; otherwise `None`.
    pub fn overlaps(&self, other: &Parameter) -> Option<Parameter> {
        if !self.same_genus(other) {
            return None;
        }
        let lhs = self.value();
        let rhs = other.value();
        if lhs.contains(&rhs) {
            return Some(self.clone());
        }
        if rhs.contains(&lhs) {
            return Some(other.clone());
        }
        None
    }

    /// Whether any link of this chain (head included) is structurally equal
    /// to `other`.
    pub fn chain_contains(&self, other: &Parameter) -> bool {
        if self.deep_equals(other) {
            return true;
        }
        self.children().iter().any(|link| link.deep_equals(other))
    }

    /// Attach `next` as this parameter's chain.
    ///
    /// Attaching across genera, or onto a parameter that already owns a
    /// chain, is rejected: the receiver is returned unchanged.
    pub fn chained(self, next: Parameter) -> Self {
        if self.next().is_some() {
            tracing::debug!(name = %self.name(), "ignoring attachment onto an already-chained parameter");
            return self;
        }
        if !self.same_genus(&next) {
            tracing::debug!(lhs = %self.name(), rhs = %next.name(), "ignoring cross-genus attachment");
            return self;
        }
        self.with_next(Some(Box::new(next)))
    }

    /// Concatenate two same-genus parameters into one chain.
    ///
    /// Deeply-equal operands are idempotent and cross-genus operands are
    /// discarded, returning `self` unchanged in both cases. Otherwise the
    /// side without a chain becomes the new head; when both sides already
    /// own chains, the left side's links are re-attached one by one onto
    /// the right side's chain.
    pub fn compose(self, other: Parameter) -> Self {
        if !self.same_genus(&other) {
            tracing::debug!(lhs = %self.name(), rhs = %other.name(), "discarding cross-genus composition");
            return self;
        }
        if self.deep_equals(&other) {
            return self;
        }
        if other.next().is_none() {
            return other.chained(self);
        }
        if self.next().is_none() {
            return self.chained(other);
        }
        let links = self.children();
        let mut merged = match other.into_next() {
            Some(chain) => *chain,
            // The branch above already returned for a chainless right side.
            None => unreachable!("chained composition requires a chained right-hand side"),
        };
        for link in links {
            merged = link.chained(merged);
        }
        merged
    }

    /// A copy of this parameter with its chain removed.
    fn detached(&self) -> Parameter {
        self.clone().with_next(None)
    }

    fn into_next(self) -> Link {
        match self {
            Self::Custom { next, .. }
            | Self::Filter { next, .. }
            | Self::FilterType { next, .. }
            | Self::Include { next, .. }
            | Self::IncludeLimit { next, .. }
            | Self::Sort { next, .. }
            | Self::SortType { next, .. }
            | Self::Stat { next, .. } => next,
        }
    }

    fn with_next(mut self, link: Link) -> Self {
        match &mut self {
            Self::Custom { next, .. }
            | Self::Filter { next, .. }
            | Self::FilterType { next, .. }
            | Self::Include { next, .. }
            | Self::IncludeLimit { next, .. }
            | Self::Sort { next, .. }
            | Self::SortType { next, .. }
            | Self::Stat { next, .. } => *next = link,
        }
        self
    }
}

/// Escape, sort and join filter values, then prepend field and operator.
///
/// Sorting the escaped values guarantees a deterministic wire rendering
/// independent of insertion order.
fn filter_expression(field: &str, op: &str, values: &ValueList) -> String {
    let mut rendered: Vec<String> = values.iter().map(|v| escape(&v.render())).collect();
    rendered.sort_unstable();
    format!("{field}:{op}:{}", rendered.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{ContentInclude, ContentScope, ContentStat, Relation, ReviewFilter, ReviewSort};
    use pretty_assertions::assert_eq;

    fn product_filter() -> Parameter {
        Parameter::filter(ReviewFilter::ProductId, Relation::EqualTo, ["test1"])
    }

    #[test]
    fn test_names() {
        assert_eq!(product_filter().name().as_str(), "Filter");
        assert_eq!(
            Parameter::filter_type(
                ContentScope::Reviews,
                ReviewFilter::Rating,
                Relation::GreaterThanOrEqualTo,
                [4],
            )
            .name()
            .as_str(),
            "Filter_Reviews"
        );
        assert_eq!(
            Parameter::include(ContentInclude::Answers).name().as_str(),
            "Include"
        );
        assert_eq!(
            Parameter::include_limit(ContentInclude::Answers, 10)
                .name()
                .as_str(),
            "Limit_Answers"
        );
        assert_eq!(
            Parameter::sort(ReviewSort::Rating, SortOrder::Desc)
                .name()
                .as_str(),
            "Sort"
        );
        assert_eq!(
            Parameter::sort_type(ContentScope::Reviews, ReviewSort::Rating, SortOrder::Asc)
                .name()
                .as_str(),
            "Sort_Reviews"
        );
        assert_eq!(Parameter::stat(ContentStat::Reviews).name().as_str(), "Stats");
        assert_eq!(Parameter::custom("Limit", 10u16).name().as_str(), "Limit");
    }

    #[test]
    fn test_peek_rendering() {
        assert_eq!(product_filter().peek(), "ProductId:eq:test1");
        assert_eq!(
            Parameter::sort(ReviewSort::SubmissionTime, SortOrder::Desc).peek(),
            "SubmissionTime:desc"
        );
        assert_eq!(Parameter::include_limit(ContentInclude::Authors, 20).peek(), "20");
        assert_eq!(Parameter::stat(ContentStat::Questions).peek(), "Questions");
        assert_eq!(Parameter::custom("Search", "great winter jacket").peek(),
            "great%20winter%20jacket");
    }

    #[test]
    fn test_filter_values_sort_independent_of_insertion_order() {
        let ab = Parameter::filter(ReviewFilter::Rating, Relation::EqualTo, ["a", "b"]);
        let ba = Parameter::filter(ReviewFilter::Rating, Relation::EqualTo, ["b", "a"]);
        assert_eq!(ab.value(), ba.value());
        assert_eq!(ab.value(), "Rating:eq:a,b");
    }

    #[test]
    fn test_filter_values_escape_reserved_delimiters() {
        let filter = Parameter::filter(
            ReviewFilter::ProductId,
            Relation::EqualTo,
            ["red,blue", "a:b"],
        );
        assert_eq!(filter.value(), "ProductId:eq:a%3Ab,red%2Cblue");
    }

    #[test]
    fn test_value_renders_chain_before_self() {
        let chain = Parameter::include(ContentInclude::Authors)
            .chained(Parameter::include(ContentInclude::Answers));
        assert_eq!(chain.peek(), "Authors");
        assert_eq!(chain.value(), "Answers,Authors");
    }

    #[test]
    fn test_same_genus() {
        let filter = product_filter();
        let other_filter = Parameter::filter(ReviewFilter::Rating, Relation::EqualTo, [5]);
        let include = Parameter::include(ContentInclude::Answers);

        assert!(filter.same_genus(&other_filter));
        assert!(!filter.same_genus(&include));
        assert!(
            !Parameter::include_limit(ContentInclude::Answers, 5)
                .same_genus(&Parameter::include_limit(ContentInclude::Authors, 5))
        );
    }

    #[test]
    fn test_equality_is_reflexive() {
        let chained = Parameter::include(ContentInclude::Authors)
            .chained(Parameter::include(ContentInclude::Answers));
        for param in [product_filter(), chained] {
            assert!(param.value_eq(&param));
            assert!(param.deep_equals(&param));
        }
    }

    #[test]
    fn test_deep_equality_requires_matching_chain_length() {
        let short = Parameter::include(ContentInclude::Authors);
        let long = Parameter::include(ContentInclude::Authors)
            .chained(Parameter::include(ContentInclude::Answers));
        assert!(!short.deep_equals(&long));
        assert!(!long.deep_equals(&short));
    }

    #[test]
    fn deep_equality_requires_only_one_shared_link() {
        // Same head, same chain length, only one link in common. The weak
        // containment policy treats these as structurally equal.
        let left = Parameter::include(ContentInclude::Products)
            .chained(
                Parameter::include(ContentInclude::Answers)
                    .chained(Parameter::include(ContentInclude::Authors)),
            );
        let right = Parameter::include(ContentInclude::Products)
            .chained(
                Parameter::include(ContentInclude::Answers)
                    .chained(Parameter::include(ContentInclude::Comments)),
            );
        assert!(left.deep_equals(&right));
    }

    #[test]
    fn test_overlaps_returns_containing_parameter() {
        let shorter = Parameter::include(ContentInclude::Answers);
        let longer = Parameter::include(ContentInclude::Authors)
            .chained(Parameter::include(ContentInclude::Answers));

        let containing = shorter.overlaps(&longer).expect("values overlap");
        assert_eq!(containing.value(), longer.value());
        let containing = longer.overlaps(&shorter).expect("values overlap");
        assert_eq!(containing.value(), longer.value());

        let unrelated = Parameter::include(ContentInclude::Products);
        assert_eq!(shorter.overlaps(&unrelated), None);
    }

    #[test]
    fn test_chained_rejects_cross_genus() {
        let filter = product_filter();
        let include = Parameter::include(ContentInclude::Answers);
        let unchanged = filter.clone().chained(include);
        assert_eq!(unchanged, filter);
    }

    #[test]
    fn test_chained_rejects_already_chained_receiver() {
        let chained = Parameter::include(ContentInclude::Authors)
            .chained(Parameter::include(ContentInclude::Answers));
        let unchanged = chained
            .clone()
            .chained(Parameter::include(ContentInclude::Products));
        assert_eq!(unchanged, chained);
    }

    #[test]
    fn test_compose_cross_genus_is_a_noop() {
        let filter = product_filter();
        let include = Parameter::include(ContentInclude::Answers);
        assert_eq!(filter.clone().compose(include), filter);
    }

    #[test]
    fn test_compose_is_idempotent_for_deep_equals() {
        let include = Parameter::include(ContentInclude::Answers);
        assert_eq!(include.clone().compose(include.clone()), include);
    }

    #[test]
    fn test_compose_chainless_right_becomes_head() {
        let left = Parameter::include(ContentInclude::Answers);
        let right = Parameter::include(ContentInclude::Authors);
        let merged = left.compose(right);
        assert_eq!(merged.peek(), "Authors");
        assert_eq!(merged.value(), "Answers,Authors");
    }

    #[test]
    fn test_compose_chainless_left_keeps_right_chain() {
        let left = Parameter::include(ContentInclude::Products);
        let right = Parameter::include(ContentInclude::Authors)
            .chained(Parameter::include(ContentInclude::Answers));
        let merged = left.compose(right);
        assert_eq!(merged.peek(), "Products");
        assert_eq!(merged.value(), "Answers,Authors,Products");
    }

    #[test]
    fn test_compose_both_chained_folds_left_links_onto_right_chain() {
        let left = Parameter::include(ContentInclude::Products)
            .chained(Parameter::include(ContentInclude::Comments));
        let right = Parameter::include(ContentInclude::Authors)
            .chained(Parameter::include(ContentInclude::Answers));
        // Both heads drop out: the left links are re-attached onto the
        // right side's chain.
        let merged = left.compose(right);
        assert_eq!(merged.value(), "Answers,Comments");
    }

    #[test]
    fn test_children_are_detached() {
        let chain = Parameter::include(ContentInclude::Products).chained(
            Parameter::include(ContentInclude::Authors)
                .chained(Parameter::include(ContentInclude::Answers)),
        );
        let children = chain.children();
        assert_eq!(children.len(), 2);
        assert!(children.iter().all(|link| link.next().is_none()));
        assert_eq!(children[0].peek(), "Authors");
        assert_eq!(children[1].peek(), "Answers");
    }

    #[test]
    fn test_chain_contains() {
        let chain = Parameter::include(ContentInclude::Authors)
            .chained(Parameter::include(ContentInclude::Answers));
        assert!(chain.chain_contains(&Parameter::include(ContentInclude::Answers)));
        assert!(chain.chain_contains(&chain));
        assert!(!chain.chain_contains(&Parameter::include(ContentInclude::Products)));
    }
}
