use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Review {
    pub review_id: i32,
    pub university_id: i32,
    pub user_id: i32,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,

    /// Author display name, joined from users on reads.
    #[sqlx(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}
