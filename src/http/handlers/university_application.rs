use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::{
    auth::AuthClaims,
    db::university_application::{
        create_university_application, get_all_university_applications,
        get_university_applications_for_user, process_university_application,
    },
    errors::AppError,
    models::{ApplicationStatus, UniversityApplication, UserRole},
    state::AppState,
};

#[derive(Deserialize)]
pub struct CreateUniversityApplicationPayload {
    pub university_name: String,
    pub description: String,
    pub location: String,
}

pub async fn create_university_application_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
    Json(payload): Json<CreateUniversityApplicationPayload>,
) -> Result<(StatusCode, Json<UniversityApplication>), AppError> {
    claims.require_representative()?;
    let user_id = claims.user_id()?;

    if payload.university_name.trim().is_empty()
        || payload.description.trim().is_empty()
        || payload.location.trim().is_empty()
    {
        return Err(AppError::BadRequest("All fields are required".into()));
    }

    let application = create_university_application(
        user_id,
        payload.university_name,
        payload.description,
        payload.location,
        state.postgres.clone(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Error creating university application: {}", e);
        e
    })?;

    Ok((StatusCode::CREATED, Json(application)))
}

/// Admins see every addition request; a representative only their own.
pub async fn list_university_applications_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
) -> Result<Json<Vec<UniversityApplication>>, AppError> {
    let applications = match claims.0.user_type {
        UserRole::Admin => get_all_university_applications(state.postgres.clone()).await,
        UserRole::UniversityRepresentative => {
            let user_id = claims.user_id()?;
            get_university_applications_for_user(user_id, state.postgres.clone()).await
        }
        UserRole::Student => {
            return Err(AppError::Forbidden("Access denied".into()));
        }
    }
    .map_err(|e| {
        tracing::error!("Error fetching university applications: {}", e);
        e
    })?;

    Ok(Json(applications))
}

#[derive(Deserialize)]
pub struct ProcessApplicationPayload {
    pub status: ApplicationStatus,
    pub admin_comment: Option<String>,
}

pub async fn process_university_application_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
    Path(application_id): Path<i32>,
    Json(payload): Json<ProcessApplicationPayload>,
) -> Result<Json<UniversityApplication>, AppError> {
    claims.require_admin()?;

    let application = process_university_application(
        application_id,
        payload.status,
        payload.admin_comment,
        state.postgres.clone(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Error processing university application: {}", e);
        e
    })?;

    Ok(Json(application))
}
