use sqlx::PgPool;

use crate::{
    errors::AppError,
    models::{ApplicationStatus, UniversityApplication},
};

/// Admin decision on an addition request. Approving creates the university
/// and records the applicant as its representative; both writes happen in
/// one transaction.
pub async fn process_university_application(
    application_id: i32,
    status: ApplicationStatus,
    admin_comment: Option<String>,
    postgres: PgPool,
) -> Result<UniversityApplication, AppError> {
    if status == ApplicationStatus::Pending {
        return Err(AppError::BadRequest(
            "Status must be 'approved' or 'rejected'".into(),
        ));
    }

    let mut tx = postgres.begin().await?;

    let application = sqlx::query_as::<_, UniversityApplication>(
        "UPDATE university_applications
         SET status = $2, admin_comment = $3
         WHERE application_id = $1 AND status = 'pending'
         RETURNING application_id, user_id, university_name, description, location,
                   status, admin_comment, created_at",
    )
    .bind(application_id)
    .bind(status)
    .bind(&admin_comment)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or_else(|| AppError::NotFound("Pending application not found".into()))?;

    if status == ApplicationStatus::Approved {
        sqlx::query(
            "INSERT INTO universities (name, description, location, representative_id)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(&application.university_name)
        .bind(&application.description)
        .bind(&application.location)
        .bind(application.user_id)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    tracing::info!(
        "University application {} processed as {:?}",
        application_id,
        status
    );

    Ok(application)
}
