use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::{
    auth::AuthClaims,
    db::{
        specialty::{create_specialty, get_specialties_for_university, post::NewSpecialty},
        university::get_university_by_id,
    },
    errors::AppError,
    models::{Specialty, UserRole},
    state::AppState,
};

pub async fn get_specialties_handler(
    State(state): State<AppState>,
    Path(university_id): Path<i32>,
) -> Result<Json<Vec<Specialty>>, AppError> {
    let specialties = get_specialties_for_university(university_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching specialties: {}", e);
            e
        })?;

    Ok(Json(specialties))
}

#[derive(Deserialize)]
pub struct CreateSpecialtyPayload {
    pub specialty_name: String,
    pub specialty_code: String,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub form_of_education: Option<String>,
    #[serde(default)]
    pub budget_places: i32,
    #[serde(default)]
    pub cost_per_year: i32,
    #[serde(default)]
    pub passing_score: i32,
}

/// Admins may add a specialty anywhere; a representative only to the
/// university they manage.
pub async fn create_specialty_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
    Path(university_id): Path<i32>,
    Json(payload): Json<CreateSpecialtyPayload>,
) -> Result<(StatusCode, Json<Specialty>), AppError> {
    if payload.specialty_name.trim().is_empty() || payload.specialty_code.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Specialty name and code are required".into(),
        ));
    }
    if payload.budget_places < 0 || payload.cost_per_year < 0 || payload.passing_score < 0 {
        return Err(AppError::BadRequest(
            "Numeric fields must not be negative".into(),
        ));
    }

    let university = get_university_by_id(university_id, state.postgres.clone()).await?;

    let user_id = claims.user_id()?;
    let allowed = match claims.0.user_type {
        UserRole::Admin => true,
        UserRole::UniversityRepresentative => university.representative_id == Some(user_id),
        UserRole::Student => false,
    };
    if !allowed {
        return Err(AppError::Forbidden(
            "You cannot manage this university".into(),
        ));
    }

    let specialty = create_specialty(
        university_id,
        NewSpecialty {
            specialty_name: payload.specialty_name,
            specialty_code: payload.specialty_code,
            description: payload.description,
            duration: payload.duration,
            form_of_education: payload.form_of_education,
            budget_places: payload.budget_places,
            cost_per_year: payload.cost_per_year,
            passing_score: payload.passing_score,
        },
        state.postgres.clone(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Error creating specialty: {}", e);
        e
    })?;

    Ok((StatusCode::CREATED, Json(specialty)))
}
