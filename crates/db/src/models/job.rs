//! Generation job entity.

use pawsona_core::job::JobStatus;
use pawsona_core::rarity::Rarity;
use pawsona_core::types::Timestamp;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

/// A row from the `generation_jobs` table.
///
/// `rarity`, `title*`, and `prompt` are frozen at creation by the
/// selector and never recomputed; only the worker mutates the rest.
#[derive(Debug, Clone, Serialize)]
pub struct Job {
    pub id: String,
    pub status: JobStatus,
    /// User-submitted photo: inline `data:image/...` payload or a URL.
    pub pet_image: String,
    /// Combined category string (`cat_female`, ...).
    pub pet_type: String,
    pub rarity: Rarity,
    pub title_id: i32,
    pub title: String,
    pub description: String,
    pub prompt: String,
    /// Populated only once `status` is `completed`.
    pub generated_image: Option<String>,
    /// Populated only once `status` is `failed`.
    pub error_message: Option<String>,
    /// The provider's task handle; set after a successful submission so
    /// overlapping invocations resume polling instead of re-submitting.
    pub external_task_id: Option<String>,
    pub retry_count: i32,
    pub created_at: Timestamp,
    pub processing_started_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
}

/// Fields chosen at creation time for a new job.
#[derive(Debug, Clone)]
pub struct NewJob {
    pub id: String,
    pub pet_image: String,
    pub pet_type: String,
    pub rarity: Rarity,
    pub title_id: i32,
    pub title: String,
    pub description: String,
    pub prompt: String,
}

impl NewJob {
    /// Materialize the initial `pending` row.
    pub fn into_job(self, now: Timestamp) -> Job {
        Job {
            id: self.id,
            status: JobStatus::Pending,
            pet_image: self.pet_image,
            pet_type: self.pet_type,
            rarity: self.rarity,
            title_id: self.title_id,
            title: self.title,
            description: self.description,
            prompt: self.prompt,
            generated_image: None,
            error_message: None,
            external_task_id: None,
            retry_count: 0,
            created_at: now,
            processing_started_at: None,
            completed_at: None,
        }
    }
}

impl FromRow<'_, PgRow> for Job {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        let status_raw: String = row.try_get("status")?;
        let status = JobStatus::parse(&status_raw).ok_or_else(|| sqlx::Error::ColumnDecode {
            index: "status".into(),
            source: format!("unknown job status '{status_raw}'").into(),
        })?;
        let rarity_raw: String = row.try_get("rarity")?;
        let rarity = Rarity::parse(&rarity_raw).ok_or_else(|| sqlx::Error::ColumnDecode {
            index: "rarity".into(),
            source: format!("unknown rarity '{rarity_raw}'").into(),
        })?;

        Ok(Job {
            id: row.try_get("id")?,
            status,
            pet_image: row.try_get("pet_image")?,
            pet_type: row.try_get("pet_type")?,
            rarity,
            title_id: row.try_get("title_id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            prompt: row.try_get("prompt")?,
            generated_image: row.try_get("generated_image")?,
            error_message: row.try_get("error_message")?,
            external_task_id: row.try_get("external_task_id")?,
            retry_count: row.try_get("retry_count")?,
            created_at: row.try_get("created_at")?,
            processing_started_at: row.try_get("processing_started_at")?,
            completed_at: row.try_get("completed_at")?,
        })
    }
}
