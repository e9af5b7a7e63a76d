use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    errors::AppError,
    models::{TopUniversity, University},
};

/// Shared SELECT for every university read path. The derived metrics
/// (review average, application counts, recency) are computed here and
/// never persisted.
const AGGREGATE_SELECT: &str = r#"
    SELECT u.universities_id, u.name, u.description, u.location, u.representative_id,
           COALESCE(ROUND(AVG(r.rating)::numeric, 1)::float8, 0) AS average_rating,
           COALESCE((
             SELECT COUNT(*) FROM admission_applications aa
             JOIN specialties s ON s.specialty_id = aa.specialty_id
             WHERE s.universities_id = u.universities_id
           ), 0) AS total_applications,
           COALESCE((
             SELECT COUNT(*) FROM admission_applications aa
             JOIN specialties s ON s.specialty_id = aa.specialty_id
             WHERE s.universities_id = u.universities_id
               AND aa.created_at >= NOW() - INTERVAL '30 days'
           ), 0) AS applications_last_30_days,
           (
             SELECT CASE WHEN MAX(aa.created_at) IS NULL THEN NULL
                         ELSE EXTRACT(DAY FROM (NOW() - MAX(aa.created_at)))::int END
             FROM admission_applications aa
             JOIN specialties s ON s.specialty_id = aa.specialty_id
             WHERE s.universities_id = u.universities_id
           ) AS days_since_last_application
    FROM universities u
    LEFT JOIN reviews r ON u.universities_id = r.university_id
"#;

#[derive(Debug, Default, Clone)]
pub struct UniversityFilters {
    pub name: Option<String>,
    pub location: Option<String>,
    pub specialty: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Rating,
    Name,
    Location,
    Popularity,
    Additive,
}

impl SortKey {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.to_ascii_lowercase()).as_deref() {
            Some("rating") => Self::Rating,
            Some("name") => Self::Name,
            Some("location") => Self::Location,
            Some("additive") => Self::Additive,
            _ => Self::Popularity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.to_ascii_lowercase()).as_deref() {
            Some("asc") => Self::Asc,
            _ => Self::Desc,
        }
    }

    fn sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

fn push_filters(qb: &mut QueryBuilder<'_, Postgres>, filters: &UniversityFilters) {
    let mut separator = " WHERE ";

    if let Some(name) = &filters.name {
        qb.push(separator).push("u.name ILIKE ");
        qb.push_bind(format!("%{name}%"));
        separator = " AND ";
    }
    if let Some(location) = &filters.location {
        qb.push(separator).push("u.location ILIKE ");
        qb.push_bind(format!("%{location}%"));
        separator = " AND ";
    }
    if let Some(specialty) = &filters.specialty {
        qb.push(separator).push(
            "EXISTS (SELECT 1 FROM specialties sp \
             WHERE sp.universities_id = u.universities_id AND sp.specialty_name ILIKE ",
        );
        qb.push_bind(format!("%{specialty}%"));
        qb.push(")");
    }
}

fn order_by_clause(sort_key: SortKey, order: SortOrder) -> String {
    match sort_key {
        SortKey::Rating => format!(" ORDER BY average_rating {}", order.sql()),
        SortKey::Name => format!(" ORDER BY u.name {}", order.sql()),
        SortKey::Location => format!(" ORDER BY u.location {}", order.sql()),
        // the additive page is re-sorted in memory after scoring
        SortKey::Additive => " ORDER BY total_applications DESC".to_string(),
        SortKey::Popularity => format!(" ORDER BY total_applications {}", order.sql()),
    }
}

pub async fn list_universities(
    filters: &UniversityFilters,
    sort_key: SortKey,
    sort_order: SortOrder,
    limit: i64,
    offset: i64,
    postgres: PgPool,
) -> Result<Vec<University>, AppError> {
    let mut qb = QueryBuilder::new(AGGREGATE_SELECT);
    push_filters(&mut qb, filters);
    qb.push(" GROUP BY u.universities_id");
    qb.push(order_by_clause(sort_key, sort_order));
    qb.push(" LIMIT ").push_bind(limit);
    qb.push(" OFFSET ").push_bind(offset);

    let universities = qb
        .build_query_as::<University>()
        .fetch_all(&postgres)
        .await?;

    Ok(universities)
}

/// The full filtered result set, unpaginated. Serves as the population
/// the additive criterion is normalized against.
pub async fn list_normalization_population(
    filters: &UniversityFilters,
    postgres: PgPool,
) -> Result<Vec<University>, AppError> {
    let mut qb = QueryBuilder::new(AGGREGATE_SELECT);
    push_filters(&mut qb, filters);
    qb.push(" GROUP BY u.universities_id");

    let universities = qb
        .build_query_as::<University>()
        .fetch_all(&postgres)
        .await?;

    Ok(universities)
}

pub async fn count_universities(
    filters: &UniversityFilters,
    postgres: PgPool,
) -> Result<i64, AppError> {
    let mut qb = QueryBuilder::new(
        "SELECT COUNT(*) FROM (SELECT u.universities_id \
         FROM universities u \
         LEFT JOIN reviews r ON u.universities_id = r.university_id",
    );
    push_filters(&mut qb, filters);
    qb.push(" GROUP BY u.universities_id) AS filtered_universities");

    let count: i64 = qb.build_query_scalar().fetch_one(&postgres).await?;

    Ok(count)
}

pub async fn get_university_by_id(id: i32, postgres: PgPool) -> Result<University, AppError> {
    let sql = format!(
        "{AGGREGATE_SELECT} WHERE u.universities_id = $1 GROUP BY u.universities_id"
    );

    let university = sqlx::query_as::<_, University>(&sql)
        .bind(id)
        .fetch_optional(&postgres)
        .await?
        .ok_or_else(|| AppError::NotFound("University not found".into()))?;

    Ok(university)
}

pub async fn get_random_university(postgres: PgPool) -> Result<University, AppError> {
    let sql = format!("{AGGREGATE_SELECT} GROUP BY u.universities_id ORDER BY RANDOM() LIMIT 1");

    let university = sqlx::query_as::<_, University>(&sql)
        .fetch_optional(&postgres)
        .await?
        .ok_or_else(|| AppError::NotFound("No universities found".into()))?;

    Ok(university)
}

pub async fn get_top_university(postgres: PgPool) -> Result<TopUniversity, AppError> {
    let university = sqlx::query_as::<_, TopUniversity>(
        "SELECT u.universities_id, u.name, u.description, u.location,
                COALESCE((SELECT ROUND(AVG(rating)::numeric, 1)::float8
                          FROM reviews WHERE university_id = u.universities_id), 0) AS average_rating,
                (SELECT COUNT(*) FROM reviews WHERE university_id = u.universities_id) AS review_count
         FROM universities u
         ORDER BY average_rating DESC, review_count DESC
         LIMIT 1",
    )
    .fetch_optional(&postgres)
    .await?
    .ok_or_else(|| AppError::NotFound("No universities found".into()))?;

    Ok(university)
}
