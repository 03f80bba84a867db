//! Question field vocabulary.

use opine_query::field::{FilterField, IncludeField, SortField};

/// Fields a question query can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionFilter {
    AuthorId,
    CampaignId,
    CategoryId,
    ContentLocale,
    HasAnswers,
    HasBestAnswer,
    HasPhotos,
    HasStaffAnswers,
    HasVideos,
    IsFeatured,
    IsSubjectActive,
    LastApprovedAnswerSubmissionTime,
    LastModeratedTime,
    LastModificationTime,
    ModeratorCode,
    ProductId,
    QuestionId,
    SubmissionId,
    SubmissionTime,
    Summary,
    TotalAnswerCount,
    TotalFeedbackCount,
    UserLocation,
}

impl FilterField for QuestionFilter {
    fn key(&self) -> &'static str {
        match self {
            Self::AuthorId => "AuthorId",
            Self::CampaignId => "CampaignId",
            Self::CategoryId => "CategoryId",
            Self::ContentLocale => "ContentLocale",
            Self::HasAnswers => "HasAnswers",
            Self::HasBestAnswer => "HasBestAnswer",
            Self::HasPhotos => "HasPhotos",
            Self::HasStaffAnswers => "HasStaffAnswers",
            Self::HasVideos => "HasVideos",
            Self::IsFeatured => "IsFeatured",
            Self::IsSubjectActive => "IsSubjectActive",
            Self::LastApprovedAnswerSubmissionTime => "LastApprovedAnswerSubmissionTime",
            Self::LastModeratedTime => "LastModeratedTime",
            Self::LastModificationTime => "LastModificationTime",
            Self::ModeratorCode => "ModeratorCode",
            Self::ProductId => "ProductId",
            Self::QuestionId => "Id",
            Self::SubmissionId => "SubmissionId",
            Self::SubmissionTime => "SubmissionTime",
            Self::Summary => "Summary",
            Self::TotalAnswerCount => "TotalAnswerCount",
            Self::TotalFeedbackCount => "TotalFeedbackCount",
            Self::UserLocation => "UserLocation",
        }
    }
}

/// Fields question results can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionSort {
    AuthorId,
    CampaignId,
    CategoryId,
    ContentLocale,
    HasAnswers,
    HasBestAnswer,
    HasPhotos,
    HasStaffAnswers,
    HasVideos,
    IsFeatured,
    IsSubjectActive,
    LastApprovedAnswerSubmissionTime,
    LastModeratedTime,
    LastModificationTime,
    ModeratorCode,
    ProductId,
    QuestionId,
    SubmissionId,
    SubmissionTime,
    Summary,
    TotalAnswerCount,
    TotalFeedbackCount,
    UserLocation,
}

impl SortField for QuestionSort {
    fn key(&self) -> &'static str {
        match self {
            Self::AuthorId => "AuthorId",
            Self::CampaignId => "CampaignId",
            Self::CategoryId => "CategoryId",
            Self::ContentLocale => "ContentLocale",
            Self::HasAnswers => "HasAnswers",
            Self::HasBestAnswer => "HasBestAnswer",
            Self::HasPhotos => "HasPhotos",
            Self::HasStaffAnswers => "HasStaffAnswers",
            Self::HasVideos => "HasVideos",
            Self::IsFeatured => "IsFeatured",
            Self::IsSubjectActive => "IsSubjectActive",
            Self::LastApprovedAnswerSubmissionTime => "LastApprovedAnswerSubmissionTime",
            Self::LastModeratedTime => "LastModeratedTime",
            Self::LastModificationTime => "LastModificationTime",
            Self::ModeratorCode => "ModeratorCode",
            Self::ProductId => "ProductId",
            Self::QuestionId => "Id",
            Self::SubmissionId => "SubmissionId",
            Self::SubmissionTime => "SubmissionTime",
            Self::Summary => "Summary",
            Self::TotalAnswerCount => "TotalAnswerCount",
            Self::TotalFeedbackCount => "TotalFeedbackCount",
            Self::UserLocation => "UserLocation",
        }
    }
}

/// Resources that can be included with question results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionInclude {
    Answers,
    Authors,
    Products,
}

impl IncludeField for QuestionInclude {
    fn key(&self) -> &'static str {
        match self {
            Self::Answers => "Answers",
            Self::Authors => "Authors",
            Self::Products => "Products",
        }
    }
}
