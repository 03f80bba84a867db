//! Author field vocabulary.

use opine_query::field::{FilterField, IncludeField};

/// Fields an author query can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorFilter {
    AuthorId,
    ContentLocale,
    HasPhotos,
    HasVideos,
    LastModeratedTime,
    LastModificationTime,
    ModeratorCode,
    SubmissionId,
    SubmissionTime,
    UserLocation,
}

impl FilterField for AuthorFilter {
    fn key(&self) -> &'static str {
        match self {
            Self::AuthorId => "Id",
            Self::ContentLocale => "ContentLocale",
            Self::HasPhotos => "HasPhotos",
            Self::HasVideos => "HasVideos",
            Self::LastModeratedTime => "LastModeratedTime",
            Self::LastModificationTime => "LastModificationTime",
            Self::ModeratorCode => "ModeratorCode",
            Self::SubmissionId => "SubmissionId",
            Self::SubmissionTime => "SubmissionTime",
            Self::UserLocation => "UserLocation",
        }
    }
}

/// Resources that can be included with author results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorInclude {
    Answers,
    Comments,
    Questions,
    Reviews,
}

impl IncludeField for AuthorInclude {
    fn key(&self) -> &'static str {
        match self {
            Self::Answers => "Answers",
            Self::Comments => "Comments",
            Self::Questions => "Questions",
            Self::Reviews => "Reviews",
        }
    }
}
