use sqlx::PgPool;

use crate::{errors::AppError, models::Specialty};

pub struct NewSpecialty {
    pub specialty_name: String,
    pub specialty_code: String,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub form_of_education: Option<String>,
    pub budget_places: i32,
    pub cost_per_year: i32,
    pub passing_score: i32,
}

pub async fn create_specialty(
    university_id: i32,
    specialty: NewSpecialty,
    postgres: PgPool,
) -> Result<Specialty, AppError> {
    let created = sqlx::query_as::<_, Specialty>(
        "INSERT INTO specialties
           (universities_id, specialty_name, specialty_code, description,
            duration, form_of_education, budget_places, cost_per_year, passing_score)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
         RETURNING specialty_id, universities_id, specialty_name, specialty_code, description,
                   duration, form_of_education, budget_places, cost_per_year, passing_score",
    )
    .bind(university_id)
    .bind(&specialty.specialty_name)
    .bind(&specialty.specialty_code)
    .bind(&specialty.description)
    .bind(&specialty.duration)
    .bind(&specialty.form_of_education)
    .bind(specialty.budget_places)
    .bind(specialty.cost_per_year)
    .bind(specialty.passing_score)
    .fetch_one(&postgres)
    .await?;

    tracing::info!(
        "Added specialty '{}' to university {}",
        created.specialty_name,
        university_id
    );

    Ok(created)
}
