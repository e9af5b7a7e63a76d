use sqlx::PgPool;

use crate::{errors::AppError, models::Review};

pub async fn get_reviews_for_university(
    university_id: i32,
    postgres: PgPool,
) -> Result<Vec<Review>, AppError> {
    let reviews = sqlx::query_as::<_, Review>(
        "SELECT r.review_id, r.university_id, r.user_id, r.rating, r.comment, r.created_at,
                u.full_name
         FROM reviews r
         JOIN users u ON u.users_id = r.user_id
         WHERE r.university_id = $1
         ORDER BY r.created_at DESC",
    )
    .bind(university_id)
    .fetch_all(&postgres)
    .await?;

    Ok(reviews)
}
