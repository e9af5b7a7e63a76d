use sqlx::PgPool;

use crate::{
    errors::AppError,
    models::{User, UserRole},
};

pub async fn create_user(
    email: String,
    password_hash: String,
    full_name: String,
    user_type: UserRole,
    exam_score: Option<i32>,
    postgres: PgPool,
) -> Result<User, AppError> {
    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (email, password, full_name, user_type, exam_score)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING users_id, email, full_name, user_type, exam_score",
    )
    .bind(&email)
    .bind(&password_hash)
    .bind(&full_name)
    .bind(user_type)
    .bind(exam_score)
    .fetch_one(&postgres)
    .await?;

    tracing::info!("Registered user {} ({:?})", user.email, user.user_type);

    Ok(user)
}
