/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a new job identifier.
///
/// Job ids are opaque strings with a `job_` prefix and a UUIDv7 body, so
/// they sort roughly by creation time in admin tooling.
pub fn new_job_id() -> String {
    format!("job_{}", uuid::Uuid::now_v7().simple())
}
