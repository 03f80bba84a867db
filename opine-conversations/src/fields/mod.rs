//! Per-resource field vocabularies.
//!
//! Every enum here names the wire key of one filterable, sortable,
//! includable or stat-able field; the query-parameter engine renders them
//! into the serialized request.

mod answer;
mod author;
mod comment;
mod product;
mod question;
mod review;

pub use answer::{AnswerFilter, AnswerSort};
pub use author::{AuthorFilter, AuthorInclude};
pub use comment::{CommentFilter, CommentInclude, CommentSort};
pub use product::{ProductFilter, ProductInclude, ProductSort};
pub use question::{QuestionFilter, QuestionInclude, QuestionSort};
pub use review::{ReviewFilter, ReviewInclude, ReviewSort};

use opine_query::field::{FilterField, SortField, StatField};

/// A related content type used to scope typed filters and sorts
/// (`Filter_Reviews=...`, `Sort_Questions=...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// Answers to consumer questions.
    Answers,
    /// Comments on reviews.
    Comments,
    /// Consumer questions.
    Questions,
    /// Product reviews.
    Reviews,
}

impl ContentType {
    fn plural_key(&self) -> &'static str {
        match self {
            Self::Answers => "Answers",
            Self::Comments => "Comments",
            Self::Questions => "Questions",
            Self::Reviews => "Reviews",
        }
    }
}

impl FilterField for ContentType {
    fn key(&self) -> &'static str {
        self.plural_key()
    }
}

impl SortField for ContentType {
    fn key(&self) -> &'static str {
        self.plural_key()
    }
}

/// Content types that per-author statistics can be requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentStat {
    /// Answer statistics.
    Answers,
    /// Question statistics.
    Questions,
    /// Review statistics.
    Reviews,
}

impl StatField for ContentStat {
    fn key(&self) -> &'static str {
        match self {
            Self::Answers => "Answers",
            Self::Questions => "Questions",
            Self::Reviews => "Reviews",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opine_query::field::{FilterField, StatField};

    #[test]
    fn test_content_scope_keys_are_plural() {
        assert_eq!(FilterField::key(&ContentType::Reviews), "Reviews");
        assert_eq!(FilterField::key(&ContentType::Answers), "Answers");
        assert_eq!(ContentStat::Questions.key(), "Questions");
    }
}
