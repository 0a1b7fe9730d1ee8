//! In-memory store adapters.
//!
//! Used by tests and local development without a database. A single
//! async mutex around each map gives every trait method the same
//! check-and-transition atomicity the Postgres adapters get from
//! conditional `UPDATE`s.

use std::collections::HashMap;
use std::collections::HashSet;

use async_trait::async_trait;
use pawsona_core::cdkey::{redeem_conflict_error, CodeStatus};
use pawsona_core::error::{CoreError, CoreResult};
use pawsona_core::job::JobStatus;
use pawsona_core::types::Timestamp;
use tokio::sync::Mutex;

use crate::models::cdkey::{Cdkey, CdkeySummary, RedeemGrant};
use crate::models::job::{Job, NewJob};
use crate::store::{JobStore, RedemptionStore};

/// Map-backed [`JobStore`].
#[derive(Default)]
pub struct MemoryJobStore {
    jobs: Mutex<HashMap<String, Job>>,
}

impl MemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JobStore for MemoryJobStore {
    async fn insert(&self, job: NewJob, now: Timestamp) -> CoreResult<Job> {
        let mut jobs = self.jobs.lock().await;
        let row = job.into_job(now);
        jobs.insert(row.id.clone(), row.clone());
        Ok(row)
    }

    async fn find(&self, id: &str) -> CoreResult<Option<Job>> {
        Ok(self.jobs.lock().await.get(id).cloned())
    }

    async fn start_processing(&self, id: &str, now: Timestamp) -> CoreResult<bool> {
        let mut jobs = self.jobs.lock().await;
        match jobs.get_mut(id) {
            Some(job) if job.status == JobStatus::Pending => {
                job.status = JobStatus::Processing;
                job.processing_started_at = Some(now);
                Ok(true)
            }
            Some(_) => Ok(false),
            None => Err(CoreError::JobNotFound(id.to_string())),
        }
    }

    async fn set_external_task(&self, id: &str, task_id: &str) -> CoreResult<()> {
        let mut jobs = self.jobs.lock().await;
        if let Some(job) = jobs.get_mut(id) {
            job.external_task_id = Some(task_id.to_string());
        }
        Ok(())
    }

    async fn complete(&self, id: &str, image: &str, now: Timestamp) -> CoreResult<bool> {
        let mut jobs = self.jobs.lock().await;
        match jobs.get_mut(id) {
            Some(job) if job.status == JobStatus::Processing => {
                job.status = JobStatus::Completed;
                job.generated_image = Some(image.to_string());
                job.completed_at = Some(now);
                Ok(true)
            }
            Some(_) => Ok(false),
            None => Err(CoreError::JobNotFound(id.to_string())),
        }
    }

    async fn fail(
        &self,
        id: &str,
        message: &str,
        retry_count: i32,
        now: Timestamp,
    ) -> CoreResult<()> {
        let mut jobs = self.jobs.lock().await;
        if let Some(job) = jobs.get_mut(id) {
            job.status = JobStatus::Failed;
            job.error_message = Some(message.to_string());
            job.retry_count = retry_count;
            job.completed_at = Some(now);
        }
        Ok(())
    }

    async fn revert_to_pending(&self, id: &str, retry_count: i32) -> CoreResult<()> {
        let mut jobs = self.jobs.lock().await;
        if let Some(job) = jobs.get_mut(id) {
            job.status = JobStatus::Pending;
            job.retry_count = retry_count;
            job.external_task_id = None;
            job.processing_started_at = None;
        }
        Ok(())
    }
}

/// Map-backed [`RedemptionStore`] following the status lifecycle.
#[derive(Default)]
pub struct MemoryRedemptionStore {
    codes: Mutex<HashMap<String, Cdkey>>,
}

impl MemoryRedemptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with `available` codes.
    pub async fn seed<I: IntoIterator<Item = String>>(&self, codes: I, now: Timestamp) {
        let mut map = self.codes.lock().await;
        for code in codes {
            map.insert(
                code.clone(),
                Cdkey {
                    code,
                    status: CodeStatus::Available,
                    created_at: now,
                    used_at: None,
                },
            );
        }
    }

    /// Current status of a code, if it exists.
    pub async fn status_of(&self, code: &str) -> Option<CodeStatus> {
        self.codes.lock().await.get(code).map(|c| c.status)
    }
}

#[async_trait]
impl RedemptionStore for MemoryRedemptionStore {
    async fn redeem(&self, code: &str, _now: Timestamp) -> CoreResult<RedeemGrant> {
        let mut codes = self.codes.lock().await;
        match codes.get_mut(code) {
            None => Err(CoreError::InvalidCode),
            Some(cdkey) if cdkey.status == CodeStatus::Available => {
                cdkey.status = CodeStatus::Pending;
                Ok(RedeemGrant {
                    code: code.to_string(),
                    kind: "single_use",
                    remaining_uses: 1,
                })
            }
            Some(cdkey) => Err(redeem_conflict_error(cdkey.status)),
        }
    }

    async fn report_success(&self, code: &str, now: Timestamp) -> CoreResult<()> {
        let mut codes = self.codes.lock().await;
        if let Some(cdkey) = codes.get_mut(code) {
            if cdkey.status == CodeStatus::Pending {
                cdkey.status = CodeStatus::Used;
                cdkey.used_at = Some(now);
            }
        }
        Ok(())
    }

    async fn report_failure(&self, code: &str) -> CoreResult<()> {
        let mut codes = self.codes.lock().await;
        if let Some(cdkey) = codes.get_mut(code) {
            if cdkey.status == CodeStatus::Pending {
                cdkey.status = CodeStatus::Available;
            }
        }
        Ok(())
    }

    async fn existing_codes(&self) -> CoreResult<HashSet<String>> {
        Ok(self.codes.lock().await.keys().cloned().collect())
    }

    async fn insert_batch(&self, codes: &[String], now: Timestamp) -> CoreResult<usize> {
        let mut map = self.codes.lock().await;
        let mut inserted = 0;
        for code in codes {
            if !map.contains_key(code) {
                map.insert(
                    code.clone(),
                    Cdkey {
                        code: code.clone(),
                        status: CodeStatus::Available,
                        created_at: now,
                        used_at: None,
                    },
                );
                inserted += 1;
            }
        }
        Ok(inserted)
    }

    async fn list(&self) -> CoreResult<Vec<CdkeySummary>> {
        let codes = self.codes.lock().await;
        let mut summaries: Vec<CdkeySummary> = codes
            .values()
            .map(|c| CdkeySummary {
                code: c.code.clone(),
                status: c.status,
                created_at: Some(c.created_at),
                used_at: c.used_at,
            })
            .collect();
        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.code.cmp(&b.code)));
        Ok(summaries)
    }

    async fn purge_used(&self) -> CoreResult<u64> {
        let mut codes = self.codes.lock().await;
        let before = codes.len();
        codes.retain(|_, c| c.status != CodeStatus::Used);
        Ok((before - codes.len()) as u64)
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::Utc;
    use pawsona_core::rarity::Rarity;
    use std::sync::Arc;

    fn sample_job(id: &str) -> NewJob {
        NewJob {
            id: id.to_string(),
            pet_image: "data:image/png;base64,AAAA".to_string(),
            pet_type: "cat_female".to_string(),
            rarity: Rarity::SR,
            title_id: 42,
            title: "title".to_string(),
            description: "description".to_string(),
            prompt: "prompt".to_string(),
        }
    }

    #[tokio::test]
    async fn job_claim_is_single_winner() {
        let store = Arc::new(MemoryJobStore::new());
        let now = Utc::now();
        store.insert(sample_job("job_1"), now).await.unwrap();

        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(
                async move { store.start_processing("job_1", Utc::now()).await },
            ));
        }

        let mut wins = 0;
        for handle in handles {
            if handle.await.unwrap().unwrap() {
                wins += 1;
            }
        }
        assert_eq!(wins, 1);

        let job = store.find("job_1").await.unwrap().unwrap();
        assert_eq!(job.status, JobStatus::Processing);
        assert!(job.processing_started_at.is_some());
    }

    #[tokio::test]
    async fn complete_requires_processing() {
        let store = MemoryJobStore::new();
        let now = Utc::now();
        store.insert(sample_job("job_2"), now).await.unwrap();

        // Still pending; completion must not apply.
        assert!(!store.complete("job_2", "img", now).await.unwrap());

        assert!(store.start_processing("job_2", now).await.unwrap());
        assert!(store.complete("job_2", "img", now).await.unwrap());

        // Second completion is a no-op.
        assert!(!store.complete("job_2", "other", now).await.unwrap());
        let job = store.find("job_2").await.unwrap().unwrap();
        assert_eq!(job.generated_image.as_deref(), Some("img"));
    }

    #[tokio::test]
    async fn revert_clears_task_handle() {
        let store = MemoryJobStore::new();
        let now = Utc::now();
        store.insert(sample_job("job_3"), now).await.unwrap();
        store.start_processing("job_3", now).await.unwrap();
        store.set_external_task("job_3", "task-9").await.unwrap();

        store.revert_to_pending("job_3", 1).await.unwrap();

        let job = store.find("job_3").await.unwrap().unwrap();
        assert_eq!(job.status, JobStatus::Pending);
        assert_eq!(job.retry_count, 1);
        assert!(job.external_task_id.is_none());
        assert!(job.processing_started_at.is_none());
    }

    #[tokio::test]
    async fn concurrent_redeem_has_exactly_one_winner() {
        let store = Arc::new(MemoryRedemptionStore::new());
        let now = Utc::now();
        store.seed(["PET-AAAA-BBBB-CCCC".to_string()], now).await;

        let mut handles = Vec::new();
        for _ in 0..16 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.redeem("PET-AAAA-BBBB-CCCC", Utc::now()).await
            }));
        }

        let mut wins = 0;
        let mut pending_conflicts = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(grant) => {
                    assert_eq!(grant.remaining_uses, 1);
                    wins += 1;
                }
                Err(CoreError::CodePending) => pending_conflicts += 1,
                Err(other) => panic!("unexpected error: {other}"),
            }
        }
        assert_eq!(wins, 1);
        assert_eq!(pending_conflicts, 15);
    }

    #[tokio::test]
    async fn lifecycle_success_path_ends_used() {
        let store = MemoryRedemptionStore::new();
        let now = Utc::now();
        store.seed(["PET-XXXX-YYYY-ZZZZ".to_string()], now).await;

        store.redeem("PET-XXXX-YYYY-ZZZZ", now).await.unwrap();
        assert_eq!(
            store.status_of("PET-XXXX-YYYY-ZZZZ").await,
            Some(CodeStatus::Pending)
        );

        store.report_success("PET-XXXX-YYYY-ZZZZ", now).await.unwrap();
        assert_eq!(
            store.status_of("PET-XXXX-YYYY-ZZZZ").await,
            Some(CodeStatus::Used)
        );

        // A used code refuses a fresh redemption.
        assert_matches!(
            store.redeem("PET-XXXX-YYYY-ZZZZ", now).await,
            Err(CoreError::AlreadyUsed)
        );
    }

    #[tokio::test]
    async fn failure_report_releases_only_pending_codes() {
        let store = MemoryRedemptionStore::new();
        let now = Utc::now();
        store.seed(["PET-ONE".to_string()], now).await;

        store.redeem("PET-ONE", now).await.unwrap();
        store.report_failure("PET-ONE").await.unwrap();
        assert_eq!(store.status_of("PET-ONE").await, Some(CodeStatus::Available));

        // Redeem again and finish; a straggling failure report must not
        // revive the used code.
        store.redeem("PET-ONE", now).await.unwrap();
        store.report_success("PET-ONE", now).await.unwrap();
        store.report_failure("PET-ONE").await.unwrap();
        assert_eq!(store.status_of("PET-ONE").await, Some(CodeStatus::Used));
    }

    #[tokio::test]
    async fn unknown_code_is_invalid() {
        let store = MemoryRedemptionStore::new();
        assert_matches!(
            store.redeem("PET-NOPE", Utc::now()).await,
            Err(CoreError::InvalidCode)
        );
    }

    #[tokio::test]
    async fn purge_removes_only_used() {
        let store = MemoryRedemptionStore::new();
        let now = Utc::now();
        store
            .seed(["A".to_string(), "B".to_string(), "C".to_string()], now)
            .await;
        store.redeem("A", now).await.unwrap();
        store.report_success("A", now).await.unwrap();
        store.redeem("B", now).await.unwrap();

        let removed = store.purge_used().await.unwrap();
        assert_eq!(removed, 1);
        assert_eq!(store.existing_codes().await.unwrap().len(), 2);
    }
}
