use sqlx::PgPool;

use crate::errors::AppError;

pub async fn delete_university(id: i32, postgres: PgPool) -> Result<(), AppError> {
    let deleted: Option<i32> = sqlx::query_scalar(
        "DELETE FROM universities WHERE universities_id = $1 RETURNING universities_id",
    )
    .bind(id)
    .fetch_optional(&postgres)
    .await?;

    if deleted.is_none() {
        return Err(AppError::NotFound("University not found".into()));
    }

    tracing::info!("Deleted university ID: {}", id);

    Ok(())
}
