use sqlx::PgPool;

use crate::{
    errors::AppError,
    models::{AdmissionApplication, ApplicationStatus},
};

/// Transition a pending application to approved/rejected. The update only
/// matches applications targeting the representative's own university, so
/// ownership and the pending precondition are enforced in one statement.
pub async fn update_admission_status(
    application_id: i32,
    representative_id: i32,
    status: ApplicationStatus,
    postgres: PgPool,
) -> Result<AdmissionApplication, AppError> {
    if status == ApplicationStatus::Pending {
        return Err(AppError::BadRequest(
            "Status must be 'approved' or 'rejected'".into(),
        ));
    }

    let application = sqlx::query_as::<_, AdmissionApplication>(
        "UPDATE admission_applications aa
         SET status = $2
         FROM specialties s
         JOIN universities un ON un.universities_id = s.universities_id
         WHERE aa.application_id = $1
           AND s.specialty_id = aa.specialty_id
           AND un.representative_id = $3
           AND aa.status = 'pending'
         RETURNING aa.application_id, aa.user_id, aa.specialty_id, aa.phone_number,
                   aa.total_score, aa.wants_budget, aa.status, aa.created_at",
    )
    .bind(application_id)
    .bind(status)
    .bind(representative_id)
    .fetch_optional(&postgres)
    .await?
    .ok_or_else(|| {
        AppError::NotFound("Pending application not found for your university".into())
    })?;

    tracing::info!(
        "Application {} set to {:?} by representative {}",
        application_id,
        status,
        representative_id
    );

    Ok(application)
}
