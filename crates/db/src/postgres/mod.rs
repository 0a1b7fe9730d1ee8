//! Postgres adapters for the store traits.
//!
//! Every state transition is a single conditional `UPDATE` whose `WHERE`
//! clause names the required current state, so concurrent callers race
//! on the database rather than on application reads.

pub mod cdkey_store;
pub mod job_store;

pub use cdkey_store::{probe_redemption_schema, LegacyCdkeyStore, RedemptionSchema, StatusCdkeyStore};
pub use job_store::PgJobStore;
