use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::models::job::GeoPoint;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub skills: Vec<String>,
    pub desired_hourly_rate: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Free-text availability ("part-time, ca tối, cuối tuần", ...).
    pub availability: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProfileRow {
    pub async fn fetch(pool: &PgPool, id: Uuid) -> Result<Option<ProfileRow>, sqlx::Error> {
        sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

/// The scorer-facing view of a candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: Uuid,
    pub skills: Vec<String>,
    pub desired_hourly_rate: Option<f64>,
    pub coordinates: Option<GeoPoint>,
    pub availability: Option<String>,
}

impl From<ProfileRow> for CandidateProfile {
    fn from(row: ProfileRow) -> Self {
        let coordinates = match (row.latitude, row.longitude) {
            (Some(latitude), Some(longitude)) => Some(GeoPoint {
                latitude,
                longitude,
            }),
            _ => None,
        };

        CandidateProfile {
            id: row.id,
            skills: row.skills,
            desired_hourly_rate: row.desired_hourly_rate,
            coordinates,
            availability: row.availability,
        }
    }
}
