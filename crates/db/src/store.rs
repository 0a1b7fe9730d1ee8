//! Store traits: the seams between domain logic and persistence.
//!
//! The worker and API only see these traits; Postgres and in-memory
//! adapters implement them with the same transition semantics. All
//! state-changing operations are atomic per call — adapters must not
//! expose read-then-write gaps for the transitions these methods name.

use async_trait::async_trait;
use pawsona_core::error::CoreResult;
use pawsona_core::types::Timestamp;

use crate::models::cdkey::{CdkeySummary, RedeemGrant};
use crate::models::job::{Job, NewJob};

/// Durable storage for generation jobs.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Persist a new `pending` job. Fails rather than leaving a partial
    /// row behind.
    async fn insert(&self, job: NewJob, now: Timestamp) -> CoreResult<Job>;

    /// Fetch a job by id.
    async fn find(&self, id: &str) -> CoreResult<Option<Job>>;

    /// Atomically claim a `pending` job for processing, recording
    /// `processing_started_at`. Returns `false` when the job was not in
    /// `pending` (someone else claimed it, or it is terminal).
    async fn start_processing(&self, id: &str, now: Timestamp) -> CoreResult<bool>;

    /// Record the provider's task handle after a successful submission.
    async fn set_external_task(&self, id: &str, task_id: &str) -> CoreResult<()>;

    /// Atomically complete a `processing` job with its generated image.
    /// Returns `false` when the job was not in `processing` (a duplicate
    /// invocation already finalized it).
    async fn complete(&self, id: &str, image: &str, now: Timestamp) -> CoreResult<bool>;

    /// Terminally fail a job, recording the message, final retry count,
    /// and completion time.
    async fn fail(&self, id: &str, message: &str, retry_count: i32, now: Timestamp)
        -> CoreResult<()>;

    /// Revert a non-terminal job to `pending` with an updated retry
    /// count, clearing any stale task handle so the next attempt
    /// re-submits from scratch.
    async fn revert_to_pending(&self, id: &str, retry_count: i32) -> CoreResult<()>;
}

/// Durable storage for redemption codes.
///
/// `redeem` and the report methods encode the code lifecycle; which
/// schema backs them is an adapter concern.
#[async_trait]
pub trait RedemptionStore: Send + Sync {
    /// Attempt to redeem a normalized code. Exactly one of N concurrent
    /// calls for the same `available` code may succeed; the rest fail
    /// with the business-rule error for the state they observed.
    async fn redeem(&self, code: &str, now: Timestamp) -> CoreResult<RedeemGrant>;

    /// Finalize a successful cycle: `pending -> used`. Idempotent.
    async fn report_success(&self, code: &str, now: Timestamp) -> CoreResult<()>;

    /// Roll back a failed cycle: `pending -> available`, only if the code
    /// is still `pending`. A late failure report after a newer successful
    /// cycle must not revive the code.
    async fn report_failure(&self, code: &str) -> CoreResult<()>;

    /// All existing code strings (for uniqueness checks during bulk
    /// generation).
    async fn existing_codes(&self) -> CoreResult<std::collections::HashSet<String>>;

    /// Insert a batch of freshly generated codes as `available`.
    /// Returns the number inserted.
    async fn insert_batch(&self, codes: &[String], now: Timestamp) -> CoreResult<usize>;

    /// List all codes, newest first.
    async fn list(&self) -> CoreResult<Vec<CdkeySummary>>;

    /// Delete all `used` codes. Returns the number removed.
    async fn purge_used(&self) -> CoreResult<u64>;
}
