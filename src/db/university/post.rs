use sqlx::PgPool;

use crate::{db::university::get::get_university_by_id, errors::AppError, models::University};

pub async fn create_university(
    name: String,
    description: String,
    location: String,
    representative_id: Option<i32>,
    postgres: PgPool,
) -> Result<University, AppError> {
    let id: i32 = sqlx::query_scalar(
        "INSERT INTO universities (name, description, location, representative_id)
         VALUES ($1, $2, $3, $4)
         RETURNING universities_id",
    )
    .bind(&name)
    .bind(&description)
    .bind(&location)
    .bind(representative_id)
    .fetch_one(&postgres)
    .await?;

    tracing::info!("Created university '{}' (ID: {})", name, id);

    // Re-read through the aggregate query so the response carries the
    // derived metrics (all zero for a fresh row).
    get_university_by_id(id, postgres).await
}
