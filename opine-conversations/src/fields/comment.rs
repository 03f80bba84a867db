//! Comment field vocabulary.

use opine_query::field::{FilterField, IncludeField, SortField};

/// Fields a comment query can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentFilter {
    AuthorId,
    CampaignId,
    CommentId,
    ContentLocale,
    IsFeatured,
    LastModeratedTime,
    LastModificationTime,
    ModeratorCode,
    ProductId,
    ReviewId,
    SubmissionId,
    SubmissionTime,
    TotalFeedbackCount,
    UserLocation,
}

impl FilterField for CommentFilter {
    fn key(&self) -> &'static str {
        match self {
            Self::AuthorId => "AuthorId",
            Self::CampaignId => "CampaignId",
            Self::CommentId => "Id",
            Self::ContentLocale => "ContentLocale",
            Self::IsFeatured => "IsFeatured",
            Self::LastModeratedTime => "LastModeratedTime",
            Self::LastModificationTime => "LastModificationTime",
            Self::ModeratorCode => "ModeratorCode",
            Self::ProductId => "ProductId",
            Self::ReviewId => "ReviewId",
            Self::SubmissionId => "SubmissionId",
            Self::SubmissionTime => "SubmissionTime",
            Self::TotalFeedbackCount => "TotalFeedbackCount",
            Self::UserLocation => "UserLocation",
        }
    }
}

/// Fields comment results can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentSort {
    AuthorId,
    CampaignId,
    CommentId,
    ContentLocale,
    IsFeatured,
    LastModeratedTime,
    LastModificationTime,
    ProductId,
    ReviewId,
    SubmissionId,
    SubmissionTime,
    TotalFeedbackCount,
    TotalNegativeFeedbackCount,
    TotalPositiveFeedbackCount,
    UserLocation,
}

impl SortField for CommentSort {
    fn key(&self) -> &'static str {
        match self {
            Self::AuthorId => "AuthorId",
            Self::CampaignId => "CampaignId",
            Self::CommentId => "Id",
            Self::ContentLocale => "ContentLocale",
            Self::IsFeatured => "IsFeatured",
            Self::LastModeratedTime => "LastModeratedTime",
            Self::LastModificationTime => "LastModificationTime",
            Self::ProductId => "ProductId",
            Self::ReviewId => "ReviewId",
            Self::SubmissionId => "SubmissionId",
            Self::SubmissionTime => "SubmissionTime",
            Self::TotalFeedbackCount => "TotalFeedbackCount",
            Self::TotalNegativeFeedbackCount => "TotalNegativeFeedbackCount",
            Self::TotalPositiveFeedbackCount => "TotalPositiveFeedbackCount",
            Self::UserLocation => "UserLocation",
        }
    }
}

/// Resources that can be included with comment results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentInclude {
    Authors,
    Products,
    Reviews,
}

impl IncludeField for CommentInclude {
    fn key(&self) -> &'static str {
        match self {
            Self::Authors => "Authors",
            Self::Products => "Products",
            Self::Reviews => "Reviews",
        }
    }
}
