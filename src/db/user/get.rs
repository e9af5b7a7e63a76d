use sqlx::PgPool;

use crate::{errors::AppError, models::user::UserCredentials};

pub async fn get_credentials_by_email(
    email: &str,
    postgres: PgPool,
) -> Result<Option<UserCredentials>, AppError> {
    let user = sqlx::query_as::<_, UserCredentials>(
        "SELECT users_id, email, password, full_name, user_type, exam_score
         FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(&postgres)
    .await?;

    Ok(user)
}

pub async fn email_exists(email: &str, postgres: PgPool) -> Result<bool, AppError> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
        .bind(email)
        .fetch_one(&postgres)
        .await?;

    Ok(exists)
}
