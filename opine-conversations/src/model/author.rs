//! Author model.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A content author.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Author {
    /// Author identifier.
    pub id: Option<String>,
    /// Display name.
    pub user_nickname: Option<String>,
    /// Author-supplied location.
    pub user_location: Option<String>,
    /// When the author profile was created.
    pub submission_time: Option<DateTime<Utc>>,
}
