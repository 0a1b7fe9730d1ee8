//! Drive one generation job through the provider's submit/poll protocol.

use std::time::Duration;

use chrono::Utc;
use pawsona_core::error::{CoreError, CoreResult};
use pawsona_core::job::{
    decide_retry, JobStatus, RetryDecision, MAX_RETRIES, POLL_CEILING_SECS, POLL_INTERVAL_SECS,
    RETRY_EXHAUSTED_MESSAGE,
};
use pawsona_db::models::job::Job;
use pawsona_db::store::JobStore;
use pawsona_provider::{ImageProvider, TaskState};

/// Polling cadence for a single invocation.
#[derive(Debug, Clone, Copy)]
pub struct WorkerConfig {
    pub poll_interval: Duration,
    pub poll_ceiling: Duration,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(POLL_INTERVAL_SECS),
            poll_ceiling: Duration::from_secs(POLL_CEILING_SECS),
        }
    }
}

/// What one invocation achieved.
#[derive(Debug, Clone)]
pub enum DriveOutcome {
    Completed(Job),
    Failed(Job),
    /// The task is still running at the provider; the job stays in
    /// `processing` and the client should invoke again later.
    Processing(Job),
}

/// Push a job toward a terminal state.
///
/// Safe against duplicate and overlapping invocations: terminal jobs
/// are returned untouched, an in-flight submission is resumed by its
/// recorded task handle instead of re-submitted, and the `pending ->
/// processing` claim admits a single winner. A transient error reverts
/// the job to `pending` with an incremented retry count and propagates;
/// the retry ceiling turns the same error terminal.
pub async fn drive_job(
    jobs: &dyn JobStore,
    provider: &dyn ImageProvider,
    config: &WorkerConfig,
    job_id: &str,
) -> CoreResult<DriveOutcome> {
    let job = jobs
        .find(job_id)
        .await?
        .ok_or_else(|| CoreError::JobNotFound(job_id.to_string()))?;

    match job.status {
        JobStatus::Completed => return Ok(DriveOutcome::Completed(job)),
        JobStatus::Failed => return Ok(DriveOutcome::Failed(job)),
        JobStatus::Pending | JobStatus::Processing => {}
    }

    match run_attempt(jobs, provider, config, &job).await {
        Ok(outcome) => Ok(outcome),
        Err(e) => match decide_retry(job.retry_count) {
            RetryDecision::Fail(count) => {
                tracing::warn!(job_id, retry_count = count, error = %e, "job failed terminally");
                jobs.fail(job_id, &e.to_string(), count, Utc::now()).await?;
                let failed = reload(jobs, job_id).await?;
                Ok(DriveOutcome::Failed(failed))
            }
            RetryDecision::Retry(count) => {
                tracing::warn!(job_id, retry_count = count, error = %e, "attempt failed, reverting to pending");
                jobs.revert_to_pending(job_id, count).await?;
                Err(e)
            }
        },
    }
}

/// Steps of one attempt; any error here goes through the retry policy.
async fn run_attempt(
    jobs: &dyn JobStore,
    provider: &dyn ImageProvider,
    config: &WorkerConfig,
    job: &Job,
) -> CoreResult<DriveOutcome> {
    // An overlapping invocation already submitted; resume its task.
    let task_id = if job.status == JobStatus::Processing {
        match &job.external_task_id {
            Some(task_id) => task_id.clone(),
            // Claimed but not yet submitted by a concurrent invocation;
            // report processing rather than racing it.
            None => return Ok(DriveOutcome::Processing(job.clone())),
        }
    } else {
        if job.retry_count >= MAX_RETRIES {
            jobs.fail(&job.id, RETRY_EXHAUSTED_MESSAGE, job.retry_count, Utc::now())
                .await?;
            let failed = reload(jobs, &job.id).await?;
            return Ok(DriveOutcome::Failed(failed));
        }

        if !jobs.start_processing(&job.id, Utc::now()).await? {
            // Lost the claim; whoever won is driving it.
            let current = reload(jobs, &job.id).await?;
            return Ok(match current.status {
                JobStatus::Completed => DriveOutcome::Completed(current),
                JobStatus::Failed => DriveOutcome::Failed(current),
                _ => DriveOutcome::Processing(current),
            });
        }

        let task_id = provider.submit(&job.prompt, &job.pet_image).await?;
        jobs.set_external_task(&job.id, &task_id).await?;
        task_id
    };

    poll_task(jobs, provider, config, &job.id, &task_id).await
}

/// Poll until the task settles or the ceiling for this invocation is
/// reached.
async fn poll_task(
    jobs: &dyn JobStore,
    provider: &dyn ImageProvider,
    config: &WorkerConfig,
    job_id: &str,
    task_id: &str,
) -> CoreResult<DriveOutcome> {
    let deadline = tokio::time::Instant::now() + config.poll_ceiling;
    loop {
        match provider.query(task_id).await? {
            TaskState::Succeeded(image) => {
                // A duplicate invocation may have finalized first; the
                // conditional update keeps the first result.
                jobs.complete(job_id, &image, Utc::now()).await?;
                let job = reload(jobs, job_id).await?;
                return Ok(match job.status {
                    JobStatus::Failed => DriveOutcome::Failed(job),
                    _ => DriveOutcome::Completed(job),
                });
            }
            TaskState::Failed(message) => {
                return Err(CoreError::Provider(message));
            }
            TaskState::InProgress => {
                if tokio::time::Instant::now() >= deadline {
                    tracing::debug!(job_id, task_id, "poll ceiling reached, still in progress");
                    let job = reload(jobs, job_id).await?;
                    return Ok(DriveOutcome::Processing(job));
                }
                tokio::time::sleep(config.poll_interval).await;
            }
        }
    }
}

async fn reload(jobs: &dyn JobStore, job_id: &str) -> CoreResult<Job> {
    jobs.find(job_id)
        .await?
        .ok_or_else(|| CoreError::JobNotFound(job_id.to_string()))
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use pawsona_core::rarity::Rarity;
    use pawsona_db::memory::MemoryJobStore;
    use pawsona_db::models::job::NewJob;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Mutex;

    fn fast_config() -> WorkerConfig {
        WorkerConfig {
            poll_interval: Duration::from_millis(1),
            poll_ceiling: Duration::from_millis(30),
        }
    }

    fn sample_job(id: &str) -> NewJob {
        NewJob {
            id: id.to_string(),
            pet_image: "data:image/png;base64,AAAA".to_string(),
            pet_type: "dog_male".to_string(),
            rarity: Rarity::SSR,
            title_id: 1,
            title: "title".to_string(),
            description: "description".to_string(),
            prompt: "prompt".to_string(),
        }
    }

    /// Provider that replays scripted submit and query results.
    struct ScriptedProvider {
        submits: Mutex<VecDeque<CoreResult<String>>>,
        queries: Mutex<VecDeque<CoreResult<TaskState>>>,
        submit_count: AtomicUsize,
    }

    impl ScriptedProvider {
        fn new(
            submits: Vec<CoreResult<String>>,
            queries: Vec<CoreResult<TaskState>>,
        ) -> Self {
            Self {
                submits: Mutex::new(submits.into()),
                queries: Mutex::new(queries.into()),
                submit_count: AtomicUsize::new(0),
            }
        }

        fn submit_count(&self) -> usize {
            self.submit_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ImageProvider for ScriptedProvider {
        async fn submit(&self, _prompt: &str, _pet_image: &str) -> CoreResult<String> {
            self.submit_count.fetch_add(1, Ordering::SeqCst);
            self.submits
                .lock()
                .await
                .pop_front()
                .unwrap_or_else(|| Err(CoreError::Provider("script exhausted".to_string())))
        }

        async fn query(&self, _task_id: &str) -> CoreResult<TaskState> {
            self.queries
                .lock()
                .await
                .pop_front()
                .unwrap_or(Ok(TaskState::InProgress))
        }
    }

    #[tokio::test]
    async fn happy_path_completes_job() {
        let store = MemoryJobStore::new();
        store.insert(sample_job("job_a"), Utc::now()).await.unwrap();
        let provider = ScriptedProvider::new(
            vec![Ok("task-1".to_string())],
            vec![
                Ok(TaskState::InProgress),
                Ok(TaskState::Succeeded("https://cdn/img.png".to_string())),
            ],
        );

        let outcome = drive_job(&store, &provider, &fast_config(), "job_a")
            .await
            .unwrap();

        assert_matches!(outcome, DriveOutcome::Completed(_));
        let job = store.find("job_a").await.unwrap().unwrap();
        assert_eq!(job.status, JobStatus::Completed);
        assert_eq!(job.generated_image.as_deref(), Some("https://cdn/img.png"));
        assert_eq!(job.external_task_id.as_deref(), Some("task-1"));
        assert!(job.completed_at.is_some());
        // Selection stayed frozen through the drive.
        assert_eq!(job.rarity, Rarity::SSR);
        assert_eq!(job.title_id, 1);
    }

    #[tokio::test]
    async fn missing_job_is_reported() {
        let store = MemoryJobStore::new();
        let provider = ScriptedProvider::new(vec![], vec![]);
        assert_matches!(
            drive_job(&store, &provider, &fast_config(), "job_nope").await,
            Err(CoreError::JobNotFound(_))
        );
    }

    #[tokio::test]
    async fn terminal_jobs_are_returned_without_side_effects() {
        let store = MemoryJobStore::new();
        let now = Utc::now();
        store.insert(sample_job("job_b"), now).await.unwrap();
        store.start_processing("job_b", now).await.unwrap();
        store.complete("job_b", "img", now).await.unwrap();

        let provider = ScriptedProvider::new(vec![], vec![]);
        let outcome = drive_job(&store, &provider, &fast_config(), "job_b")
            .await
            .unwrap();

        assert_matches!(outcome, DriveOutcome::Completed(_));
        assert_eq!(provider.submit_count(), 0);
    }

    #[tokio::test]
    async fn existing_task_handle_skips_resubmission() {
        let store = MemoryJobStore::new();
        let now = Utc::now();
        store.insert(sample_job("job_c"), now).await.unwrap();
        store.start_processing("job_c", now).await.unwrap();
        store.set_external_task("job_c", "task-old").await.unwrap();

        let provider = ScriptedProvider::new(
            vec![],
            vec![Ok(TaskState::Succeeded("img".to_string()))],
        );
        let outcome = drive_job(&store, &provider, &fast_config(), "job_c")
            .await
            .unwrap();

        assert_matches!(outcome, DriveOutcome::Completed(_));
        assert_eq!(provider.submit_count(), 0);
    }

    #[tokio::test]
    async fn ceiling_reached_keeps_job_processing() {
        let store = MemoryJobStore::new();
        store.insert(sample_job("job_d"), Utc::now()).await.unwrap();
        // Every query says in-progress; the scripted default keeps
        // answering that past the ceiling.
        let provider = ScriptedProvider::new(vec![Ok("task-2".to_string())], vec![]);

        let outcome = drive_job(&store, &provider, &fast_config(), "job_d")
            .await
            .unwrap();

        assert_matches!(outcome, DriveOutcome::Processing(_));
        let job = store.find("job_d").await.unwrap().unwrap();
        assert_eq!(job.status, JobStatus::Processing);
        assert_eq!(job.retry_count, 0);
        assert_eq!(job.external_task_id.as_deref(), Some("task-2"));
    }

    #[tokio::test]
    async fn transient_failure_reverts_to_pending() {
        let store = MemoryJobStore::new();
        store.insert(sample_job("job_e"), Utc::now()).await.unwrap();
        let provider = ScriptedProvider::new(
            vec![Err(CoreError::Provider("boom".to_string()))],
            vec![],
        );

        let result = drive_job(&store, &provider, &fast_config(), "job_e").await;

        assert_matches!(result, Err(CoreError::Provider(_)));
        let job = store.find("job_e").await.unwrap().unwrap();
        assert_eq!(job.status, JobStatus::Pending);
        assert_eq!(job.retry_count, 1);
        assert!(job.external_task_id.is_none());
    }

    #[tokio::test]
    async fn provider_reported_failure_follows_retry_policy() {
        let store = MemoryJobStore::new();
        store.insert(sample_job("job_f"), Utc::now()).await.unwrap();
        let provider = ScriptedProvider::new(
            vec![Ok("task-3".to_string())],
            vec![Ok(TaskState::Failed("nsfw rejected".to_string()))],
        );

        let result = drive_job(&store, &provider, &fast_config(), "job_f").await;

        assert_matches!(result, Err(CoreError::Provider(_)));
        let job = store.find("job_f").await.unwrap().unwrap();
        assert_eq!(job.status, JobStatus::Pending);
        assert_eq!(job.retry_count, 1);
    }

    #[tokio::test]
    async fn third_failure_is_terminal() {
        let store = MemoryJobStore::new();
        store.insert(sample_job("job_g"), Utc::now()).await.unwrap();
        let provider = ScriptedProvider::new(
            vec![
                Err(CoreError::Provider("one".to_string())),
                Err(CoreError::Provider("two".to_string())),
                Err(CoreError::Provider("three".to_string())),
            ],
            vec![],
        );

        let config = fast_config();
        assert!(drive_job(&store, &provider, &config, "job_g").await.is_err());
        assert!(drive_job(&store, &provider, &config, "job_g").await.is_err());

        // Third attempt exhausts the budget and settles the job.
        let outcome = drive_job(&store, &provider, &config, "job_g")
            .await
            .unwrap();
        assert_matches!(outcome, DriveOutcome::Failed(_));

        let job = store.find("job_g").await.unwrap().unwrap();
        assert_eq!(job.status, JobStatus::Failed);
        assert_eq!(job.retry_count, 3);
        assert_eq!(job.error_message.as_deref(), Some("three"));
        assert!(job.completed_at.is_some());

        // A fourth invocation is a no-op on the terminal job.
        let outcome = drive_job(&store, &provider, &config, "job_g")
            .await
            .unwrap();
        assert_matches!(outcome, DriveOutcome::Failed(_));
        assert_eq!(provider.submit_count(), 3);
    }

    #[tokio::test]
    async fn exhausted_budget_at_entry_forces_failure_without_submitting() {
        let store = MemoryJobStore::new();
        store.insert(sample_job("job_h"), Utc::now()).await.unwrap();
        store.revert_to_pending("job_h", MAX_RETRIES).await.unwrap();

        let provider = ScriptedProvider::new(vec![Ok("task-x".to_string())], vec![]);
        let outcome = drive_job(&store, &provider, &fast_config(), "job_h")
            .await
            .unwrap();

        assert_matches!(outcome, DriveOutcome::Failed(_));
        let job = store.find("job_h").await.unwrap().unwrap();
        assert_eq!(job.error_message.as_deref(), Some(RETRY_EXHAUSTED_MESSAGE));
        assert_eq!(provider.submit_count(), 0);
    }
}
