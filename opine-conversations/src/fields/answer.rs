//! Answer field vocabulary.

use opine_query::field::{FilterField, SortField};

/// Fields an answer sub-query can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerFilter {
    AnswerId,
    AuthorId,
    CampaignId,
    ContentLocale,
    HasPhotos,
    IsBestAnswer,
    IsBrandAnswer,
    LastModeratedTime,
    LastModificationTime,
    ModeratorCode,
    ProductId,
    QuestionId,
    SubmissionId,
    SubmissionTime,
    TotalFeedbackCount,
    UserLocation,
}

impl FilterField for AnswerFilter {
    fn key(&self) -> &'static str {
        match self {
            Self::AnswerId => "Id",
            Self::AuthorId => "AuthorId",
            Self::CampaignId => "CampaignId",
            Self::ContentLocale => "ContentLocale",
            Self::HasPhotos => "HasPhotos",
            Self::IsBestAnswer => "IsBestAnswer",
            Self::IsBrandAnswer => "IsBrandAnswer",
            Self::LastModeratedTime => "LastModeratedTime",
            Self::LastModificationTime => "LastModificationTime",
            Self::ModeratorCode => "ModeratorCode",
            Self::ProductId => "ProductId",
            Self::QuestionId => "QuestionId",
            Self::SubmissionId => "SubmissionId",
            Self::SubmissionTime => "SubmissionTime",
            Self::TotalFeedbackCount => "TotalFeedbackCount",
            Self::UserLocation => "UserLocation",
        }
    }
}

/// Fields answer results can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerSort {
    AnswerId,
    AuthorId,
    CampaignId,
    ContentLocale,
    IsBestAnswer,
    LastModeratedTime,
    LastModificationTime,
    ProductId,
    QuestionId,
    SubmissionId,
    SubmissionTime,
    TotalFeedbackCount,
    UserLocation,
}

impl SortField for AnswerSort {
    fn key(&self) -> &'static str {
        match self {
            Self::AnswerId => "Id",
            Self::AuthorId => "AuthorId",
            Self::CampaignId => "CampaignId",
            Self::ContentLocale => "ContentLocale",
            Self::IsBestAnswer => "IsBestAnswer",
            Self::LastModeratedTime => "LastModeratedTime",
            Self::LastModificationTime => "LastModificationTime",
            Self::ProductId => "ProductId",
            Self::QuestionId => "QuestionId",
            Self::SubmissionId => "SubmissionId",
            Self::SubmissionTime => "SubmissionTime",
            Self::TotalFeedbackCount => "TotalFeedbackCount",
            Self::UserLocation => "UserLocation",
        }
    }
}
