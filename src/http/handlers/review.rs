use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::{
    auth::AuthClaims,
    db::review::{create_review, delete_review, get_reviews_for_university},
    errors::AppError,
    models::Review,
    state::AppState,
    validate,
};

pub async fn get_reviews_handler(
    State(state): State<AppState>,
    Path(university_id): Path<i32>,
) -> Result<Json<Vec<Review>>, AppError> {
    let reviews = get_reviews_for_university(university_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching reviews: {}", e);
            e
        })?;

    Ok(Json(reviews))
}

#[derive(Deserialize)]
pub struct CreateReviewPayload {
    pub rating: i32,
    pub comment: String,
}

pub async fn create_review_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
    Path(university_id): Path<i32>,
    Json(payload): Json<CreateReviewPayload>,
) -> Result<(StatusCode, Json<Review>), AppError> {
    let user_id = claims.user_id()?;

    if !validate::is_valid_rating(payload.rating) {
        return Err(AppError::BadRequest(
            "Rating must be between 1 and 5".into(),
        ));
    }
    let comment = payload.comment.trim().to_string();
    if comment.is_empty() || comment.chars().count() > validate::COMMENT_MAX_LENGTH {
        return Err(AppError::BadRequest(
            "Comment must be between 1 and 150 characters".into(),
        ));
    }

    let review = create_review(
        university_id,
        user_id,
        payload.rating,
        comment,
        state.postgres.clone(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Error creating review: {}", e);
        e
    })?;

    Ok((StatusCode::CREATED, Json(review)))
}

pub async fn delete_review_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
    Path(review_id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    claims.require_admin()?;

    delete_review(review_id, state.postgres.clone()).await?;

    Ok(Json(serde_json::json!({ "message": "Review deleted" })))
}
