//! Postgres adapter for [`JobStore`].

use async_trait::async_trait;
use pawsona_core::error::CoreResult;
use pawsona_core::job::JobStatus;
use pawsona_core::types::Timestamp;

use crate::models::job::{Job, NewJob};
use crate::store::JobStore;
use crate::{storage_error, DbPool};

/// Column list for `generation_jobs` queries.
const COLUMNS: &str = "\
    id, status, pet_image, pet_type, rarity, title_id, title, \
    description, prompt, generated_image, error_message, \
    external_task_id, retry_count, created_at, processing_started_at, \
    completed_at";

/// Postgres-backed job storage.
pub struct PgJobStore {
    pool: DbPool,
}

impl PgJobStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobStore for PgJobStore {
    async fn insert(&self, job: NewJob, now: Timestamp) -> CoreResult<Job> {
        let query = format!(
            "INSERT INTO generation_jobs \
             (id, status, pet_image, pet_type, rarity, title_id, title, \
              description, prompt, retry_count, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, 0, $10) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(&job.id)
            .bind(JobStatus::Pending.as_str())
            .bind(&job.pet_image)
            .bind(&job.pet_type)
            .bind(job.rarity.as_str())
            .bind(job.title_id)
            .bind(&job.title)
            .bind(&job.description)
            .bind(&job.prompt)
            .bind(now)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| storage_error("failed to insert job", e))
    }

    async fn find(&self, id: &str) -> CoreResult<Option<Job>> {
        let query = format!("SELECT {COLUMNS} FROM generation_jobs WHERE id = $1");
        sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("failed to fetch job", e))
    }

    async fn start_processing(&self, id: &str, now: Timestamp) -> CoreResult<bool> {
        let result = sqlx::query(
            "UPDATE generation_jobs \
             SET status = $2, processing_started_at = $3 \
             WHERE id = $1 AND status = $4",
        )
        .bind(id)
        .bind(JobStatus::Processing.as_str())
        .bind(now)
        .bind(JobStatus::Pending.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| storage_error("failed to claim job", e))?;
        Ok(result.rows_affected() == 1)
    }

    async fn set_external_task(&self, id: &str, task_id: &str) -> CoreResult<()> {
        sqlx::query("UPDATE generation_jobs SET external_task_id = $2 WHERE id = $1")
            .bind(id)
            .bind(task_id)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("failed to record provider task", e))?;
        Ok(())
    }

    async fn complete(&self, id: &str, image: &str, now: Timestamp) -> CoreResult<bool> {
        let result = sqlx::query(
            "UPDATE generation_jobs \
             SET status = $2, generated_image = $3, completed_at = $4 \
             WHERE id = $1 AND status = $5",
        )
        .bind(id)
        .bind(JobStatus::Completed.as_str())
        .bind(image)
        .bind(now)
        .bind(JobStatus::Processing.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| storage_error("failed to complete job", e))?;
        Ok(result.rows_affected() == 1)
    }

    async fn fail(
        &self,
        id: &str,
        message: &str,
        retry_count: i32,
        now: Timestamp,
    ) -> CoreResult<()> {
        sqlx::query(
            "UPDATE generation_jobs \
             SET status = $2, error_message = $3, retry_count = $4, completed_at = $5 \
             WHERE id = $1",
        )
        .bind(id)
        .bind(JobStatus::Failed.as_str())
        .bind(message)
        .bind(retry_count)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| storage_error("failed to fail job", e))?;
        Ok(())
    }

    async fn revert_to_pending(&self, id: &str, retry_count: i32) -> CoreResult<()> {
        sqlx::query(
            "UPDATE generation_jobs \
             SET status = $2, retry_count = $3, external_task_id = NULL, \
                 processing_started_at = NULL \
             WHERE id = $1",
        )
        .bind(id)
        .bind(JobStatus::Pending.as_str())
        .bind(retry_count)
        .execute(&self.pool)
        .await
        .map_err(|e| storage_error("failed to revert job", e))?;
        Ok(())
    }
}
