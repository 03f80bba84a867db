//! Product field vocabulary.

use opine_query::field::{FilterField, IncludeField, SortField};

/// Fields a product query can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductFilter {
    AverageOverallRating,
    CategoryAncestorId,
    CategoryId,
    IsActive,
    IsDisabled,
    LastAnswerTime,
    LastQuestionTime,
    LastReviewTime,
    Name,
    ProductId,
    RatingsOnlyReviewCount,
    TotalAnswerCount,
    TotalQuestionCount,
    TotalReviewCount,
}

impl FilterField for ProductFilter {
    fn key(&self) -> &'static str {
        match self {
            Self::AverageOverallRating => "AverageOverallRating",
            Self::CategoryAncestorId => "CategoryAncestorId",
            Self::CategoryId => "CategoryId",
            Self::IsActive => "IsActive",
            Self::IsDisabled => "IsDisabled",
            Self::LastAnswerTime => "LastAnswerTime",
            Self::LastQuestionTime => "LastQuestionTime",
            Self::LastReviewTime => "LastReviewTime",
            Self::Name => "Name",
            Self::ProductId => "Id",
            Self::RatingsOnlyReviewCount => "RatingsOnlyReviewCount",
            Self::TotalAnswerCount => "TotalAnswerCount",
            Self::TotalQuestionCount => "TotalQuestionCount",
            Self::TotalReviewCount => "TotalReviewCount",
        }
    }
}

/// Fields product results can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSort {
    AverageOverallRating,
    CategoryId,
    IsActive,
    IsDisabled,
    LastAnswerTime,
    LastQuestionTime,
    LastReviewTime,
    Name,
    ProductId,
    RatingsOnlyReviewCount,
    TotalAnswerCount,
    TotalQuestionCount,
    TotalReviewCount,
}

impl SortField for ProductSort {
    fn key(&self) -> &'static str {
        match self {
            Self::AverageOverallRating => "AverageOverallRating",
            Self::CategoryId => "CategoryId",
            Self::IsActive => "IsActive",
            Self::IsDisabled => "IsDisabled",
            Self::LastAnswerTime => "LastAnswerTime",
            Self::LastQuestionTime => "LastQuestionTime",
            Self::LastReviewTime => "LastReviewTime",
            Self::Name => "Name",
            Self::ProductId => "Id",
            Self::RatingsOnlyReviewCount => "RatingsOnlyReviewCount",
            Self::TotalAnswerCount => "TotalAnswerCount",
            Self::TotalQuestionCount => "TotalQuestionCount",
            Self::TotalReviewCount => "TotalReviewCount",
        }
    }
}

/// Resources that can be included with product results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductInclude {
    Answers,
    Authors,
    Comments,
    Questions,
    Reviews,
}

impl IncludeField for ProductInclude {
    fn key(&self) -> &'static str {
        match self {
            Self::Answers => "Answers",
            Self::Authors => "Authors",
            Self::Comments => "Comments",
            Self::Questions => "Questions",
            Self::Reviews => "Reviews",
        }
    }
}
