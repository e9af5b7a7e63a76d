use sqlx::PgPool;

use crate::{errors::AppError, models::Specialty};

pub async fn get_specialties_for_university(
    university_id: i32,
    postgres: PgPool,
) -> Result<Vec<Specialty>, AppError> {
    let specialties = sqlx::query_as::<_, Specialty>(
        "SELECT specialty_id, universities_id, specialty_name, specialty_code, description,
                duration, form_of_education, budget_places, cost_per_year, passing_score
         FROM specialties
         WHERE universities_id = $1
         ORDER BY specialty_name",
    )
    .bind(university_id)
    .fetch_all(&postgres)
    .await?;

    Ok(specialties)
}
