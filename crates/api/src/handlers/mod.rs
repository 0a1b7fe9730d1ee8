//! Request handlers, grouped by resource.

pub mod admin;
pub mod cdkeys;
pub mod jobs;
