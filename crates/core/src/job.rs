//! Generation-job lifecycle constants and retry policy.
//!
//! Jobs move `pending -> processing -> completed`, with a bounded retry
//! loop `processing -> pending` and a terminal `failed`. The worker never
//! daemonizes; each externally-triggered invocation drives one job and
//! applies [`decide_retry`] to any error it hits on the way.

use serde::{Deserialize, Serialize};

/// Maximum number of failed attempts before a job is terminally failed.
pub const MAX_RETRIES: i32 = 3;

/// Error message recorded when the retry ceiling forces a failure.
pub const RETRY_EXHAUSTED_MESSAGE: &str = "Too many failed generation attempts";

/// Seconds between provider polls within one worker invocation.
pub const POLL_INTERVAL_SECS: u64 = 3;

/// Overall polling ceiling for one worker invocation, in seconds. When
/// reached the job is left in `processing` for a later invocation.
pub const POLL_CEILING_SECS: u64 = 120;

/// Job lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl JobStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::Processing => "processing",
            JobStatus::Completed => "completed",
            JobStatus::Failed => "failed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(JobStatus::Pending),
            "processing" => Some(JobStatus::Processing),
            "completed" => Some(JobStatus::Completed),
            "failed" => Some(JobStatus::Failed),
            _ => None,
        }
    }

    /// Terminal states admit no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }
}

/// What to do with a job after an attempt errored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Revert to `pending`; the next external trigger retries from
    /// submission. Carries the new retry count.
    Retry(i32),
    /// The ceiling is reached; fail terminally. Carries the final count.
    Fail(i32),
}

/// Apply the bounded retry policy to a failed attempt.
///
/// `retry_count` is the count *before* this failure. All errors are
/// treated as retryable up to the ceiling; no distinction between error
/// kinds is made.
pub fn decide_retry(retry_count: i32) -> RetryDecision {
    let next = retry_count + 1;
    if next >= MAX_RETRIES {
        RetryDecision::Fail(next)
    } else {
        RetryDecision::Retry(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_two_failures_retry() {
        assert_eq!(decide_retry(0), RetryDecision::Retry(1));
        assert_eq!(decide_retry(1), RetryDecision::Retry(2));
    }

    #[test]
    fn third_failure_is_terminal() {
        assert_eq!(decide_retry(2), RetryDecision::Fail(3));
    }

    #[test]
    fn counts_beyond_the_ceiling_stay_terminal() {
        assert_eq!(decide_retry(7), RetryDecision::Fail(8));
    }

    #[test]
    fn terminal_states() {
        assert!(JobStatus::Completed.is_terminal());
        assert!(JobStatus::Failed.is_terminal());
        assert!(!JobStatus::Pending.is_terminal());
        assert!(!JobStatus::Processing.is_terminal());
    }

    #[test]
    fn status_round_trips_through_strings() {
        for status in [
            JobStatus::Pending,
            JobStatus::Processing,
            JobStatus::Completed,
            JobStatus::Failed,
        ] {
            assert_eq!(JobStatus::parse(status.as_str()), Some(status));
        }
    }
}
