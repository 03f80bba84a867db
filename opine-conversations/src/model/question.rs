//! Question model.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A consumer question.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Question {
    /// Question identifier.
    pub id: Option<String>,
    /// Product the question was asked about.
    pub product_id: Option<String>,
    /// Author identifier.
    pub author_id: Option<String>,
    /// Author display name.
    pub user_nickname: Option<String>,
    /// One-line summary.
    pub question_summary: Option<String>,
    /// Full question text.
    pub question_details: Option<String>,
    /// Moderation status of the question.
    pub moderation_status: Option<String>,
    /// Submission identifier.
    pub submission_id: Option<String>,
    /// When the question was submitted.
    pub submission_time: Option<DateTime<Utc>>,
    /// Identifiers of the question's answers.
    #[serde(default)]
    pub answer_ids: Vec<String>,
    /// Number of answers.
    pub total_answer_count: Option<u32>,
    /// Whether staff answers exist.
    pub has_staff_answers: Option<bool>,
}
