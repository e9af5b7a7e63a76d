use sqlx::PgPool;

use crate::{errors::AppError, models::Review};

pub async fn create_review(
    university_id: i32,
    user_id: i32,
    rating: i32,
    comment: String,
    postgres: PgPool,
) -> Result<Review, AppError> {
    let review = sqlx::query_as::<_, Review>(
        "WITH ins AS (
           INSERT INTO reviews (university_id, user_id, rating, comment)
           VALUES ($1, $2, $3, $4)
           RETURNING review_id, university_id, user_id, rating, comment, created_at
         )
         SELECT ins.*, u.full_name
         FROM ins JOIN users u ON u.users_id = ins.user_id",
    )
    .bind(university_id)
    .bind(user_id)
    .bind(rating)
    .bind(&comment)
    .fetch_one(&postgres)
    .await?;

    tracing::info!(
        "User {} reviewed university {} with rating {}",
        user_id,
        university_id,
        rating
    );

    Ok(review)
}
