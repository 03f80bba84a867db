//! The display API response envelope.

use indexmap::IndexMap;
use serde::Deserialize;

use super::{Answer, Author, Comment, Product, Question, Review};

/// An error entry reported by the display API inside an otherwise valid
/// envelope.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiError {
    /// Human-readable message.
    pub message: Option<String>,
    /// Machine-readable error code.
    pub code: Option<String>,
}

/// Included related resources, keyed by identifier.
///
/// Only the sections requested through include parameters are populated.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Includes {
    /// Included answers.
    #[serde(default)]
    pub answers: IndexMap<String, Answer>,
    /// Included authors.
    #[serde(default)]
    pub authors: IndexMap<String, Author>,
    /// Included comments.
    #[serde(default)]
    pub comments: IndexMap<String, Comment>,
    /// Included products.
    #[serde(default)]
    pub products: IndexMap<String, Product>,
    /// Included questions.
    #[serde(default)]
    pub questions: IndexMap<String, Question>,
    /// Included reviews.
    #[serde(default)]
    pub reviews: IndexMap<String, Review>,
}

/// The envelope wrapping every display response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct QueryResponse<T> {
    /// Requested result limit.
    pub limit: Option<u32>,
    /// Requested result offset.
    pub offset: Option<u32>,
    /// Total number of matching results.
    pub total_results: Option<u32>,
    /// Whether the API reported request errors.
    #[serde(default)]
    pub has_errors: bool,
    /// The reported request errors.
    #[serde(default)]
    pub errors: Vec<ApiError>,
    /// The matching results.
    #[serde(default)]
    pub results: Vec<T>,
    /// Included related resources.
    #[serde(default)]
    pub includes: Includes,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const QUESTION_ENVELOPE: &str = r#"{
        "Limit": 10,
        "Offset": 0,
        "TotalResults": 1,
        "HasErrors": false,
        "Results": [
            {
                "Id": "14828",
                "ProductId": "test1",
                "AuthorId": "eplz083100g",
                "UserNickname": "123thisisme",
                "QuestionSummary": "Das ist mein test :)",
                "QuestionDetails": "Das ist mein test :)",
                "ModerationStatus": "APPROVED",
                "SubmissionTime": "2018-05-01T18:19:13.000+00:00",
                "AnswerIds": ["16292"],
                "TotalAnswerCount": 1
            }
        ],
        "Includes": {
            "Answers": {
                "16292": {
                    "Id": "16292",
                    "QuestionId": "14828",
                    "AuthorId": "c6ryqeb2bq0",
                    "UserNickname": "asdfasdfasdfasdf",
                    "ModerationStatus": "APPROVED",
                    "AnswerText": "example answer body"
                }
            }
        }
    }"#;

    #[test]
    fn test_decode_question_envelope() {
        let response: QueryResponse<Question> = serde_json::from_str(QUESTION_ENVELOPE).unwrap();

        assert_eq!(response.limit, Some(10));
        assert_eq!(response.total_results, Some(1));
        assert!(!response.has_errors);
        assert_eq!(response.results.len(), 1);

        let question = &response.results[0];
        assert_eq!(question.id.as_deref(), Some("14828"));
        assert_eq!(question.product_id.as_deref(), Some("test1"));
        assert_eq!(question.user_nickname.as_deref(), Some("123thisisme"));
        assert_eq!(question.answer_ids, vec!["16292"]);

        let answer = response.includes.answers.get("16292").unwrap();
        assert_eq!(answer.question_id.as_deref(), Some("14828"));
        assert_eq!(answer.answer_text.as_deref(), Some("example answer body"));
    }

    #[test]
    fn test_decode_error_envelope() {
        let body = r#"{
            "HasErrors": true,
            "Errors": [
                {"Message": "The passkey provided is invalid", "Code": "ERROR_ACCESS_DENIED"}
            ]
        }"#;

        let response: QueryResponse<Question> = serde_json::from_str(body).unwrap();
        assert!(response.has_errors);
        assert_eq!(
            response.errors[0].code.as_deref(),
            Some("ERROR_ACCESS_DENIED")
        );
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_decode_review_with_statistics_include() {
        let body = r#"{
            "TotalResults": 1,
            "Results": [
                {
                    "Id": "r-1",
                    "ProductId": "test1",
                    "Rating": 4,
                    "Title": "Good jacket",
                    "ReviewText": "Warm and light.",
                    "IsRecommended": true,
                    "SubmissionTime": "2018-05-01T18:19:13.000+00:00"
                }
            ],
            "Includes": {
                "Products": {
                    "test1": {
                        "Id": "test1",
                        "Name": "Winter Jacket",
                        "CategoryId": "jackets",
                        "Brand": {"Id": "northpeak", "Name": "North Peak"},
                        "ReviewStatistics": {
                            "AverageOverallRating": 4.3,
                            "TotalReviewCount": 17
                        }
                    }
                }
            }
        }"#;

        let response: QueryResponse<Review> = serde_json::from_str(body).unwrap();
        let review = &response.results[0];
        assert_eq!(review.rating, Some(4));
        assert_eq!(review.is_recommended, Some(true));

        let product = response.includes.products.get("test1").unwrap();
        assert_eq!(product.brand.as_ref().unwrap().id.as_deref(), Some("northpeak"));
        assert_eq!(
            product
                .review_statistics
                .as_ref()
                .unwrap()
                .average_overall_rating,
            Some(4.3)
        );
    }
}
