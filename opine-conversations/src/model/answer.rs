//! Answer model.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// An answer to a consumer question.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Answer {
    /// Answer identifier.
    pub id: Option<String>,
    /// Question this answer belongs to.
    pub question_id: Option<String>,
    /// Author identifier.
    pub author_id: Option<String>,
    /// Author display name.
    pub user_nickname: Option<String>,
    /// Answer body.
    pub answer_text: Option<String>,
    /// Moderation status of the answer.
    pub moderation_status: Option<String>,
    /// When the answer was submitted.
    pub submission_time: Option<DateTime<Utc>>,
    /// Whether the answer was marked as best.
    pub is_best_answer: Option<bool>,
    /// Number of feedback entries on this answer.
    pub total_feedback_count: Option<u32>,
}
