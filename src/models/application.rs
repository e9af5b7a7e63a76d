use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "VARCHAR", rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct AdmissionApplication {
    pub application_id: i32,
    pub user_id: i32,
    pub specialty_id: i32,
    pub phone_number: String,
    pub total_score: i32,
    pub wants_budget: bool,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
}

/// A student's own application, joined with the program it targets.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct MyAdmissionRow {
    pub application_id: i32,
    pub specialty_name: String,
    pub university_name: String,
    pub phone_number: String,
    pub total_score: i32,
    pub wants_budget: bool,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
}

/// An application as seen by the representative reviewing it.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct UniversityAdmissionRow {
    pub application_id: i32,
    pub applicant_name: String,
    pub applicant_email: String,
    pub exam_score: Option<i32>,
    pub specialty_name: String,
    pub phone_number: String,
    pub total_score: i32,
    pub wants_budget: bool,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UniversityApplication {
    pub application_id: i32,
    pub user_id: i32,
    pub university_name: String,
    pub description: String,
    pub location: String,
    pub status: ApplicationStatus,
    pub admin_comment: Option<String>,
    pub created_at: DateTime<Utc>,
}
