//! Review model.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A product review.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Review {
    /// Review identifier.
    pub id: Option<String>,
    /// Product the review was written for.
    pub product_id: Option<String>,
    /// Author identifier.
    pub author_id: Option<String>,
    /// Author display name.
    pub user_nickname: Option<String>,
    /// Author-supplied location.
    pub user_location: Option<String>,
    /// Star rating.
    pub rating: Option<i32>,
    /// Review title.
    pub title: Option<String>,
    /// Review body.
    pub review_text: Option<String>,
    /// Whether the author recommends the product.
    pub is_recommended: Option<bool>,
    /// Whether the review is featured.
    pub is_featured: Option<bool>,
    /// Moderation status of the review.
    pub moderation_status: Option<String>,
    /// When the review was submitted.
    pub submission_time: Option<DateTime<Utc>>,
    /// When the review was last modified.
    pub last_modification_time: Option<DateTime<Utc>>,
    /// Identifiers of comments on this review.
    #[serde(default)]
    pub comment_ids: Vec<String>,
    /// Number of comments on this review.
    pub total_comment_count: Option<u32>,
    /// Number of feedback entries on this review.
    pub total_feedback_count: Option<u32>,
}
