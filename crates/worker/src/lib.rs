//! On-demand generation worker.
//!
//! Not a daemon: each invocation of [`drive::drive_job`] pushes one job
//! as far as it can within a bounded polling window, then returns. The
//! client re-invokes it until the job settles, and overlapping
//! invocations for the same job are safe.

pub mod drive;

pub use drive::{drive_job, DriveOutcome, WorkerConfig};
