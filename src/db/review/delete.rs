use sqlx::PgPool;

use crate::errors::AppError;

pub async fn delete_review(review_id: i32, postgres: PgPool) -> Result<(), AppError> {
    let deleted: Option<i32> =
        sqlx::query_scalar("DELETE FROM reviews WHERE review_id = $1 RETURNING review_id")
            .bind(review_id)
            .fetch_optional(&postgres)
            .await?;

    if deleted.is_none() {
        return Err(AppError::NotFound("Review not found".into()));
    }

    Ok(())
}
