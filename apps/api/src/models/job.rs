use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// A job posting as stored. Scraped postings arrive with most optional
/// fields missing; absence always means "unknown", never zero.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub title: String,
    pub raw_description: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Free-text work arrangement ("full-time", "remote", "bán thời gian", ...).
    pub work_type: Option<String>,
    pub skills: Vec<String>,
    pub hourly_rate: Option<f64>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub salary_text: Option<String>,
    pub schedule_text: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Salary in whichever of the three upstream representations was populated.
/// Collapsed into a single type at the data-access boundary so the scorer
/// never branches on representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Salary {
    Hourly { rate: f64 },
    MonthlyRange { min: Option<f64>, max: Option<f64> },
    Text { raw: String },
}

/// The scorer-facing view of a job: salary already normalized, coordinates
/// paired up, everything optional still optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub raw_description: Option<String>,
    pub location: Option<String>,
    pub coordinates: Option<GeoPoint>,
    pub work_type: Option<String>,
    pub skills: Vec<String>,
    pub salary: Option<Salary>,
    pub schedule_text: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl JobRow {
    pub async fn fetch(pool: &PgPool, id: Uuid) -> Result<Option<JobRow>, sqlx::Error> {
        sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_active(pool: &PgPool) -> Result<Vec<JobRow>, sqlx::Error> {
        sqlx::query_as::<_, JobRow>(
            "SELECT * FROM jobs WHERE status = 'active' ORDER BY created_at DESC",
        )
        .fetch_all(pool)
        .await
    }
}

impl From<JobRow> for JobPosting {
    fn from(row: JobRow) -> Self {
        let coordinates = match (row.latitude, row.longitude) {
            (Some(latitude), Some(longitude)) => Some(GeoPoint {
                latitude,
                longitude,
            }),
            _ => None,
        };

        // Precedence: explicit hourly rate, then structured monthly range,
        // then whatever free text the crawler captured.
        let salary = if let Some(rate) = row.hourly_rate {
            Some(Salary::Hourly { rate })
        } else if row.salary_min.is_some() || row.salary_max.is_some() {
            Some(Salary::MonthlyRange {
                min: row.salary_min,
                max: row.salary_max,
            })
        } else {
            row.salary_text
                .as_deref()
                .filter(|t| !t.trim().is_empty())
                .map(|t| Salary::Text { raw: t.to_string() })
        };

        JobPosting {
            id: row.id,
            title: row.title,
            raw_description: row.raw_description,
            location: row.location,
            coordinates,
            work_type: row.work_type,
            skills: row.skills,
            salary,
            schedule_text: row.schedule_text,
        }
    }
}
