use sqlx::PgPool;

use crate::{
    errors::AppError,
    models::{MyAdmissionRow, UniversityAdmissionRow},
};

pub async fn get_admissions_for_user(
    user_id: i32,
    postgres: PgPool,
) -> Result<Vec<MyAdmissionRow>, AppError> {
    let applications = sqlx::query_as::<_, MyAdmissionRow>(
        "SELECT aa.application_id, s.specialty_name, un.name AS university_name,
                aa.phone_number, aa.total_score, aa.wants_budget, aa.status, aa.created_at
         FROM admission_applications aa
         JOIN specialties s ON s.specialty_id = aa.specialty_id
         JOIN universities un ON un.universities_id = s.universities_id
         WHERE aa.user_id = $1
         ORDER BY aa.created_at DESC",
    )
    .bind(user_id)
    .fetch_all(&postgres)
    .await?;

    Ok(applications)
}

/// Applications targeting any specialty of the university the given
/// representative manages.
pub async fn get_admissions_for_representative(
    representative_id: i32,
    postgres: PgPool,
) -> Result<Vec<UniversityAdmissionRow>, AppError> {
    let applications = sqlx::query_as::<_, UniversityAdmissionRow>(
        "SELECT aa.application_id, u.full_name AS applicant_name, u.email AS applicant_email,
                u.exam_score, s.specialty_name, aa.phone_number, aa.total_score,
                aa.wants_budget, aa.status, aa.created_at
         FROM admission_applications aa
         JOIN users u ON u.users_id = aa.user_id
         JOIN specialties s ON s.specialty_id = aa.specialty_id
         JOIN universities un ON un.universities_id = s.universities_id
         WHERE un.representative_id = $1
         ORDER BY aa.created_at DESC",
    )
    .bind(representative_id)
    .fetch_all(&postgres)
    .await?;

    Ok(applications)
}
