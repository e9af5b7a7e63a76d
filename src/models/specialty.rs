use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Specialty {
    pub specialty_id: i32,
    pub universities_id: i32,
    pub specialty_name: String,
    pub specialty_code: String,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub form_of_education: Option<String>,
    pub budget_places: i32,
    pub cost_per_year: i32,
    pub passing_score: i32,
}
