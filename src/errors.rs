use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("JWT error: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),

    #[error("Password hash error: {0}")]
    HashError(#[from] bcrypt::BcryptError),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Env error: {0}")]
    EnvError(String),

    #[error("Not found")]
    NotFound(String),
}

impl AppError {
    pub fn to_response(&self) -> (StatusCode, String) {
        match self {
            AppError::DatabaseError(e) => constraint_response(e),
            AppError::JwtError(e) => (StatusCode::UNAUTHORIZED, e.to_string()),
            AppError::HashError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Unexpected server error".into(),
            ),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::EnvError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
        }
    }
}

/// Every error body is `{ "message": ... }`, the shape the frontend reads.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.to_response();
        (status, Json(json!({ "message": message }))).into_response()
    }
}

/// Translate the PostgreSQL constraint codes the schema can raise into
/// user-facing responses. Everything else is a plain 500.
fn constraint_response(err: &sqlx::Error) -> (StatusCode, String) {
    if let sqlx::Error::Database(db_err) = err {
        match db_err.code().as_deref() {
            // unique violation
            Some("23505") => {
                return (
                    StatusCode::CONFLICT,
                    "A record with this data already exists".into(),
                );
            }
            // foreign key violation
            Some("23503") => {
                return (StatusCode::BAD_REQUEST, "Related record not found".into());
            }
            // check constraint violation
            Some("23514") => {
                return (
                    StatusCode::BAD_REQUEST,
                    "Invalid data, check the submitted fields".into(),
                );
            }
            _ => {}
        }
    }

    if matches!(err, sqlx::Error::RowNotFound) {
        return (StatusCode::NOT_FOUND, "Record not found".into());
    }

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Unexpected server error".into(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn error_bodies_are_json_messages() {
        let response = AppError::BadRequest("All fields are required".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let content_type = response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .expect("content type must be set");
        assert_eq!(content_type, "application/json");

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body must be readable");
        let value: serde_json::Value =
            serde_json::from_slice(&bytes).expect("body must be JSON");
        assert_eq!(value["message"], "All fields are required");
    }

    #[tokio::test]
    async fn not_found_maps_to_404_with_message() {
        let response = AppError::NotFound("University not found".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body must be readable");
        let value: serde_json::Value =
            serde_json::from_slice(&bytes).expect("body must be JSON");
        assert_eq!(value["message"], "University not found");
    }
}
