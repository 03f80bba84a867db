//! # opine-query
//!
//! Typed query-parameter composition engine for the Opine SDK.
//!
//! Every display query against the Opine platform is described by a set of
//! heterogeneous concerns — filters, typed filters, sorts, typed sorts,
//! includes, include limits, statistics requests and free-form custom
//! fields. This crate represents each concern as a [`Parameter`], chains
//! concerns of the same *genus* (same variant and wire name) into a single
//! linked value, and serializes the whole collection deterministically into
//! a wire query string.
//!
//! ## Parameters
//!
//! Parameters are built from the per-resource field vocabularies (see the
//! `opine-conversations` crate) through the constructors on [`Parameter`]:
//!
//! ```rust
//! use opine_query::{Parameter, SortOrder};
//! use opine_query::field::{FilterField, FilterOperator, SortField};
//!
//! #[derive(Clone, Copy)]
//! enum ReviewFilter { ProductId }
//! impl FilterField for ReviewFilter {
//!     fn key(&self) -> &'static str { "ProductId" }
//! }
//!
//! #[derive(Clone, Copy)]
//! enum ReviewSort { Rating }
//! impl SortField for ReviewSort {
//!     fn key(&self) -> &'static str { "Rating" }
//! }
//!
//! #[derive(Clone, Copy)]
//! enum Relation { EqualTo }
//! impl FilterOperator for Relation {
//!     fn key(&self) -> &'static str { "eq" }
//! }
//!
//! let filter = Parameter::filter(ReviewFilter::ProductId, Relation::EqualTo, ["test1"]);
//! assert_eq!(filter.name().as_str(), "Filter");
//! assert_eq!(filter.value(), "ProductId:eq:test1");
//!
//! let sort = Parameter::sort(ReviewSort::Rating, SortOrder::Desc);
//! assert_eq!(sort.value(), "Rating:desc");
//! ```
//!
//! ## Collections
//!
//! A [`ParameterSet`] holds at most one entry per genus. [`ParameterSet::add`]
//! replaces an existing entry of the same genus; [`ParameterSet::coalesce`]
//! merges the new parameter into the existing chain instead, so several
//! concerns accumulate under one wire name:
//!
//! ```rust
//! use opine_query::{Parameter, ParameterSet};
//! # use opine_query::field::IncludeField;
//! # #[derive(Clone, Copy)] enum Inc { Answers, Authors }
//! # impl IncludeField for Inc {
//! #     fn key(&self) -> &'static str {
//! #         match self { Inc::Answers => "Answers", Inc::Authors => "Authors" }
//! #     }
//! # }
//!
//! let mut params = ParameterSet::new();
//! params.coalesce(Parameter::include(Inc::Answers));
//! params.coalesce(Parameter::include(Inc::Authors));
//! assert_eq!(params.encode(), "Include=Answers,Authors");
//! ```
//!
//! ## Determinism
//!
//! Filter values are escaped and lexicographically sorted before joining,
//! so the wire rendering never depends on insertion order; reserved
//! delimiters inside user-supplied values are percent-escaped (see
//! [`escape`]).
//!
//! The engine is purely computational: no I/O, no locking, no shared
//! mutable state. Parameters are plain values and every composition
//! operation returns a new value.

pub mod escape;
pub mod field;
pub mod param;
pub mod set;
pub mod types;
pub mod value;

#[cfg(test)]
pub(crate) mod fixtures;

pub use param::{Genus, Parameter, ParameterKind, ValueList};
pub use set::ParameterSet;
pub use types::SortOrder;
pub use value::ParameterValue;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::field::{FilterField, FilterOperator, IncludeField, SortField, StatField};
    pub use crate::param::{Genus, Parameter, ParameterKind};
    pub use crate::set::ParameterSet;
    pub use crate::types::SortOrder;
    pub use crate::value::ParameterValue;
}
