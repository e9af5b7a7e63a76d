use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "VARCHAR", rename_all = "snake_case")]
pub enum UserRole {
    Student,
    UniversityRepresentative,
    Admin,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub users_id: i32,
    pub email: String,
    pub full_name: String,
    pub user_type: UserRole,
    pub exam_score: Option<i32>,
}

/// Row used only by login; the password hash never leaves the db layer.
#[derive(Debug, sqlx::FromRow)]
pub struct UserCredentials {
    pub users_id: i32,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub user_type: UserRole,
    pub exam_score: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user ID
    pub email: String,
    pub full_name: String,
    pub user_type: UserRole,
    pub exp: usize, // expiration time
}
