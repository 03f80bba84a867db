//! Minimal field vocabularies shared by the unit tests.

use crate::field::{FilterField, FilterOperator, IncludeField, SortField, StatField};

#[derive(Debug, Clone, Copy)]
pub(crate) enum ReviewFilter {
    ProductId,
    Rating,
}

impl FilterField for ReviewFilter {
    fn key(&self) -> &'static str {
        match self {
            Self::ProductId => "ProductId",
            Self::Rating => "Rating",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum ReviewSort {
    Rating,
    SubmissionTime,
}

impl SortField for ReviewSort {
    fn key(&self) -> &'static str {
        match self {
            Self::Rating => "Rating",
            Self::SubmissionTime => "SubmissionTime",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum ContentInclude {
    Answers,
    Authors,
    Comments,
    Products,
}

impl IncludeField for ContentInclude {
    fn key(&self) -> &'static str {
        match self {
            Self::Answers => "Answers",
            Self::Authors => "Authors",
            Self::Comments => "Comments",
            Self::Products => "Products",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum ContentScope {
    Reviews,
}

impl FilterField for ContentScope {
    fn key(&self) -> &'static str {
        match self {
            Self::Reviews => "Reviews",
        }
    }
}

impl SortField for ContentScope {
    fn key(&self) -> &'static str {
        match self {
            Self::Reviews => "Reviews",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum ContentStat {
    Questions,
    Reviews,
}

impl StatField for ContentStat {
    fn key(&self) -> &'static str {
        match self {
            Self::Questions => "Questions",
            Self::Reviews => "Reviews",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Relation {
    EqualTo,
    GreaterThanOrEqualTo,
}

impl FilterOperator for Relation {
    fn key(&self) -> &'static str {
        match self {
            Self::EqualTo => "eq",
            Self::GreaterThanOrEqualTo => "gte",
        }
    }
}
