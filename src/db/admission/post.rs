use sqlx::PgPool;

use crate::{errors::AppError, models::AdmissionApplication};

pub async fn create_admission_application(
    user_id: i32,
    specialty_id: i32,
    phone_number: String,
    total_score: i32,
    wants_budget: bool,
    postgres: PgPool,
) -> Result<AdmissionApplication, AppError> {
    let application = sqlx::query_as::<_, AdmissionApplication>(
        "INSERT INTO admission_applications
           (user_id, specialty_id, phone_number, total_score, wants_budget)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING application_id, user_id, specialty_id, phone_number,
                   total_score, wants_budget, status, created_at",
    )
    .bind(user_id)
    .bind(specialty_id)
    .bind(&phone_number)
    .bind(total_score)
    .bind(wants_budget)
    .fetch_one(&postgres)
    .await?;

    tracing::info!(
        "User {} applied to specialty {} (application {})",
        user_id,
        specialty_id,
        application.application_id
    );

    Ok(application)
}
