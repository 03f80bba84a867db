//! Review field vocabulary.

use opine_query::field::{FilterField, IncludeField, SortField};

/// Fields a review query can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewFilter {
    AuthorId,
    CampaignId,
    CategoryAncestorId,
    ContentLocale,
    HasComments,
    HasPhotos,
    HasVideos,
    IsFeatured,
    IsRatingsOnly,
    IsRecommended,
    IsSubjectActive,
    LastModeratedTime,
    LastModificationTime,
    ModeratorCode,
    ProductId,
    Rating,
    ReviewId,
    SubmissionId,
    SubmissionTime,
    TotalCommentCount,
    TotalFeedbackCount,
    UserLocation,
}

impl FilterField for ReviewFilter {
    fn key(&self) -> &'static str {
        match self {
            Self::AuthorId => "AuthorId",
            Self::CampaignId => "CampaignId",
            Self::CategoryAncestorId => "CategoryAncestorId",
            Self::ContentLocale => "ContentLocale",
            Self::HasComments => "HasComments",
            Self::HasPhotos => "HasPhotos",
            Self::HasVideos => "HasVideos",
            Self::IsFeatured => "IsFeatured",
            Self::IsRatingsOnly => "IsRatingsOnly",
            Self::IsRecommended => "IsRecommended",
            Self::IsSubjectActive => "IsSubjectActive",
            Self::LastModeratedTime => "LastModeratedTime",
            Self::LastModificationTime => "LastModificationTime",
            Self::ModeratorCode => "ModeratorCode",
            Self::ProductId => "ProductId",
            Self::Rating => "Rating",
            Self::ReviewId => "Id",
            Self::SubmissionId => "SubmissionId",
            Self::SubmissionTime => "SubmissionTime",
            Self::TotalCommentCount => "TotalCommentCount",
            Self::TotalFeedbackCount => "TotalFeedbackCount",
            Self::UserLocation => "UserLocation",
        }
    }
}

/// Fields review results can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewSort {
    AuthorId,
    CampaignId,
    ContentLocale,
    HasComments,
    HasPhotos,
    HasVideos,
    IsFeatured,
    IsRatingsOnly,
    IsRecommended,
    LastModeratedTime,
    LastModificationTime,
    ProductId,
    Rating,
    ReviewId,
    SubmissionId,
    SubmissionTime,
    TotalCommentCount,
    TotalFeedbackCount,
    UserLocation,
}

impl SortField for ReviewSort {
    fn key(&self) -> &'static str {
        match self {
            Self::AuthorId => "AuthorId",
            Self::CampaignId => "CampaignId",
            Self::ContentLocale => "ContentLocale",
            Self::HasComments => "HasComments",
            Self::HasPhotos => "HasPhotos",
            Self::HasVideos => "HasVideos",
            Self::IsFeatured => "IsFeatured",
            Self::IsRatingsOnly => "IsRatingsOnly",
            Self::IsRecommended => "IsRecommended",
            Self::LastModeratedTime => "LastModeratedTime",
            Self::LastModificationTime => "LastModificationTime",
            Self::ProductId => "ProductId",
            Self::Rating => "Rating",
            Self::ReviewId => "Id",
            Self::SubmissionId => "SubmissionId",
            Self::SubmissionTime => "SubmissionTime",
            Self::TotalCommentCount => "TotalCommentCount",
            Self::TotalFeedbackCount => "TotalFeedbackCount",
            Self::UserLocation => "UserLocation",
        }
    }
}

/// Resources that can be included with review results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewInclude {
    Authors,
    Comments,
    Products,
}

impl IncludeField for ReviewInclude {
    fn key(&self) -> &'static str {
        match self {
            Self::Authors => "Authors",
            Self::Comments => "Comments",
            Self::Products => "Products",
        }
    }
}
