//! Comment model.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A comment on a review.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Comment {
    /// Comment identifier.
    pub id: Option<String>,
    /// Review this comment belongs to.
    pub review_id: Option<String>,
    /// Author identifier.
    pub author_id: Option<String>,
    /// Author display name.
    pub user_nickname: Option<String>,
    /// Comment body.
    pub comment_text: Option<String>,
    /// Moderation status of the comment.
    pub moderation_status: Option<String>,
    /// When the comment was submitted.
    pub submission_time: Option<DateTime<Utc>>,
    /// Whether the comment is featured.
    pub is_featured: Option<bool>,
    /// Number of feedback entries on this comment.
    pub total_feedback_count: Option<u32>,
}
