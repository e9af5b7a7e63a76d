use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::{
    auth::AuthClaims,
    db::university::{
        SortKey, SortOrder, UniversityFilters, count_universities, create_university,
        delete_university, get_random_university, get_top_university, get_university_by_id,
        list_normalization_population, list_universities, update_university,
    },
    errors::AppError,
    models::{TopUniversity, University, UniversityPage},
    scoring,
    state::AppState,
};

const DEFAULT_LIMIT: i64 = 10;
const MAX_LIMIT: i64 = 100;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUniversitiesParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub name: Option<String>,
    pub location: Option<String>,
    pub specialty: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub include_additive: Option<bool>,
}

/// Clamp client-supplied pagination and derive the offset without
/// overflowing on absurd page numbers.
fn page_window(page: Option<i64>, limit: Option<i64>) -> (i64, i64, i64) {
    let page = page.unwrap_or(1).max(1);
    let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let offset = page.saturating_sub(1).saturating_mul(limit);
    (page, limit, offset)
}

/// Ceiling division; an empty result set still reports one page.
fn total_pages(total_count: i64, limit: i64) -> i64 {
    ((total_count + limit - 1) / limit).max(1)
}

pub async fn list_universities_handler(
    State(state): State<AppState>,
    Query(params): Query<ListUniversitiesParams>,
) -> Result<Json<UniversityPage>, AppError> {
    let (page, limit, offset) = page_window(params.page, params.limit);

    let filters = UniversityFilters {
        name: params.name,
        location: params.location,
        specialty: params.specialty,
    };
    let sort_key = SortKey::parse(params.sort_by.as_deref());
    let sort_order = SortOrder::parse(params.sort_order.as_deref());
    let include_additive = params.include_additive.unwrap_or(false);

    let mut universities = list_universities(
        &filters,
        sort_key,
        sort_order,
        limit,
        offset,
        state.postgres.clone(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Error listing universities: {}", e);
        e
    })?;

    if include_additive {
        let population = list_normalization_population(&filters, state.postgres.clone())
            .await
            .map_err(|e| {
                tracing::error!("Error fetching normalization population: {}", e);
                e
            })?;

        scoring::attach_additive_criterion(&mut universities, &population);

        if sort_key == SortKey::Additive {
            universities.sort_by(|a, b| {
                let a_score = a.additive_criterion.unwrap_or(0.0);
                let b_score = b.additive_criterion.unwrap_or(0.0);
                let ordering = a_score
                    .partial_cmp(&b_score)
                    .unwrap_or(std::cmp::Ordering::Equal);
                match sort_order {
                    SortOrder::Asc => ordering,
                    SortOrder::Desc => ordering.reverse(),
                }
            });
        }
    }

    let total_count = count_universities(&filters, state.postgres.clone()).await?;
    let total_pages = total_pages(total_count, limit);

    Ok(Json(UniversityPage {
        universities,
        total_pages,
        current_page: page,
        total_count,
    }))
}

pub async fn get_university_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<University>, AppError> {
    let university = get_university_by_id(id, state.postgres.clone()).await?;

    Ok(Json(university))
}

pub async fn random_university_handler(
    State(state): State<AppState>,
) -> Result<Json<University>, AppError> {
    let university = get_random_university(state.postgres.clone()).await?;

    Ok(Json(university))
}

pub async fn top_university_handler(
    State(state): State<AppState>,
) -> Result<Json<TopUniversity>, AppError> {
    let university = get_top_university(state.postgres.clone()).await?;

    Ok(Json(university))
}

#[derive(Deserialize)]
pub struct UniversityPayload {
    pub name: String,
    pub description: String,
    pub location: String,
}

fn validate_university_payload(payload: &UniversityPayload) -> Result<(), AppError> {
    if payload.name.trim().is_empty()
        || payload.description.trim().is_empty()
        || payload.location.trim().is_empty()
    {
        return Err(AppError::BadRequest("All fields are required".into()));
    }
    Ok(())
}

pub async fn create_university_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
    Json(payload): Json<UniversityPayload>,
) -> Result<(StatusCode, Json<University>), AppError> {
    claims.require_admin()?;
    validate_university_payload(&payload)?;

    let university = create_university(
        payload.name,
        payload.description,
        payload.location,
        None,
        state.postgres.clone(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Error creating university: {}", e);
        e
    })?;

    Ok((StatusCode::CREATED, Json(university)))
}

pub async fn update_university_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
    Path(id): Path<i32>,
    Json(payload): Json<UniversityPayload>,
) -> Result<Json<University>, AppError> {
    claims.require_admin()?;
    validate_university_payload(&payload)?;

    let university = update_university(
        id,
        payload.name,
        payload.description,
        payload.location,
        state.postgres.clone(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Error updating university {}: {}", id, e);
        e
    })?;

    Ok(Json(university))
}

pub async fn delete_university_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    claims.require_admin()?;

    delete_university(id, state.postgres.clone()).await?;

    Ok(Json(
        serde_json::json!({ "message": "University deleted successfully" }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_window_defaults() {
        assert_eq!(page_window(None, None), (1, DEFAULT_LIMIT, 0));
        assert_eq!(page_window(Some(3), Some(20)), (3, 20, 40));
    }

    #[test]
    fn page_window_clamps_bad_input() {
        assert_eq!(page_window(Some(0), Some(0)), (1, 1, 0));
        assert_eq!(page_window(Some(-5), Some(500)), (1, MAX_LIMIT, 0));
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(95, 10), 10);
    }

    #[test]
    fn page_window_survives_huge_page_numbers() {
        let (_, _, offset) = page_window(Some(i64::MAX), Some(10));
        assert!(offset >= 0, "offset must never go negative");

        let (_, _, offset) = page_window(Some(i64::MAX), None);
        assert!(offset >= 0);
    }
}
