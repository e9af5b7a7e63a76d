use sqlx::PgPool;

use crate::{db::university::get::get_university_by_id, errors::AppError, models::University};

pub async fn update_university(
    id: i32,
    name: String,
    description: String,
    location: String,
    postgres: PgPool,
) -> Result<University, AppError> {
    let updated: Option<i32> = sqlx::query_scalar(
        "UPDATE universities SET name = $1, description = $2, location = $3
         WHERE universities_id = $4
         RETURNING universities_id",
    )
    .bind(&name)
    .bind(&description)
    .bind(&location)
    .bind(id)
    .fetch_optional(&postgres)
    .await?;

    if updated.is_none() {
        return Err(AppError::NotFound("University not found".into()));
    }

    get_university_by_id(id, postgres).await
}
