use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::{
    auth::AuthClaims,
    db::admission::{
        create_admission_application, get_admissions_for_representative, get_admissions_for_user,
        update_admission_status,
    },
    errors::AppError,
    models::{AdmissionApplication, ApplicationStatus, MyAdmissionRow, UniversityAdmissionRow},
    state::AppState,
    validate,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdmissionPayload {
    pub specialty_id: i32,
    pub phone_number: String,
    pub total_score: i32,
    #[serde(default)]
    pub wants_budget: bool,
}

pub async fn create_admission_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
    Json(payload): Json<CreateAdmissionPayload>,
) -> Result<(StatusCode, Json<AdmissionApplication>), AppError> {
    let user_id = claims.user_id()?;

    let phone_number = validate::normalize_phone_number(&payload.phone_number)
        .ok_or_else(|| AppError::BadRequest("Invalid phone number format".into()))?;

    if !validate::is_valid_exam_score(payload.total_score) {
        return Err(AppError::BadRequest(
            "Total score must be between 1 and 999".into(),
        ));
    }

    let application = create_admission_application(
        user_id,
        payload.specialty_id,
        phone_number,
        payload.total_score,
        payload.wants_budget,
        state.postgres.clone(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Error creating admission application: {}", e);
        e
    })?;

    Ok((StatusCode::CREATED, Json(application)))
}

pub async fn my_admissions_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
) -> Result<Json<Vec<MyAdmissionRow>>, AppError> {
    let user_id = claims.user_id()?;

    let applications = get_admissions_for_user(user_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching admissions for user {}: {}", user_id, e);
            e
        })?;

    Ok(Json(applications))
}

pub async fn university_admissions_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
) -> Result<Json<Vec<UniversityAdmissionRow>>, AppError> {
    claims.require_representative()?;
    let representative_id = claims.user_id()?;

    let applications = get_admissions_for_representative(representative_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching admissions for university: {}", e);
            e
        })?;

    Ok(Json(applications))
}

#[derive(Deserialize)]
pub struct UpdateStatusPayload {
    pub status: ApplicationStatus,
}

pub async fn update_admission_status_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
    Path(application_id): Path<i32>,
    Json(payload): Json<UpdateStatusPayload>,
) -> Result<Json<AdmissionApplication>, AppError> {
    claims.require_representative()?;
    let representative_id = claims.user_id()?;

    let application = update_admission_status(
        application_id,
        representative_id,
        payload.status,
        state.postgres.clone(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Error updating admission status: {}", e);
        e
    })?;

    Ok(Json(application))
}
