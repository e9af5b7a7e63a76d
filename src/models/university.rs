use serde::{Deserialize, Serialize};

/// University row together with the aggregates the list and detail
/// queries compute (review average, application counts, recency).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct University {
    pub universities_id: i32,
    pub name: String,
    pub description: String,
    pub location: String,
    pub representative_id: Option<i32>,

    pub average_rating: f64,
    pub total_applications: i64,
    pub applications_last_30_days: i64,
    pub days_since_last_application: Option<i32>,

    /// Derived per request, never persisted.
    #[sqlx(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additive_criterion: Option<f64>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct TopUniversity {
    pub universities_id: i32,
    pub name: String,
    pub description: String,
    pub location: String,
    pub average_rating: f64,
    pub review_count: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UniversityPage {
    pub universities: Vec<University>,
    pub total_pages: i64,
    pub current_page: i64,
    pub total_count: i64,
}
