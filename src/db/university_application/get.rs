use sqlx::PgPool;

use crate::{errors::AppError, models::UniversityApplication};

const SELECT_COLUMNS: &str = "application_id, user_id, university_name, description, location,
                              status, admin_comment, created_at";

pub async fn get_all_university_applications(
    postgres: PgPool,
) -> Result<Vec<UniversityApplication>, AppError> {
    let sql = format!(
        "SELECT {SELECT_COLUMNS} FROM university_applications ORDER BY created_at DESC"
    );

    let applications = sqlx::query_as::<_, UniversityApplication>(&sql)
        .fetch_all(&postgres)
        .await?;

    Ok(applications)
}

pub async fn get_university_applications_for_user(
    user_id: i32,
    postgres: PgPool,
) -> Result<Vec<UniversityApplication>, AppError> {
    let sql = format!(
        "SELECT {SELECT_COLUMNS} FROM university_applications
         WHERE user_id = $1 ORDER BY created_at DESC"
    );

    let applications = sqlx::query_as::<_, UniversityApplication>(&sql)
        .bind(user_id)
        .fetch_all(&postgres)
        .await?;

    Ok(applications)
}
