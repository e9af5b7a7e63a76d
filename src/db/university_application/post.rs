use sqlx::PgPool;

use crate::{errors::AppError, models::UniversityApplication};

pub async fn create_university_application(
    user_id: i32,
    university_name: String,
    description: String,
    location: String,
    postgres: PgPool,
) -> Result<UniversityApplication, AppError> {
    let application = sqlx::query_as::<_, UniversityApplication>(
        "INSERT INTO university_applications (user_id, university_name, description, location)
         VALUES ($1, $2, $3, $4)
         RETURNING application_id, user_id, university_name, description, location,
                   status, admin_comment, created_at",
    )
    .bind(user_id)
    .bind(&university_name)
    .bind(&description)
    .bind(&location)
    .fetch_one(&postgres)
    .await?;

    tracing::info!(
        "Representative {} requested addition of '{}'",
        user_id,
        university_name
    );

    Ok(application)
}
