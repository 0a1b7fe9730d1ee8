//! Persisted entity models and DTOs.

pub mod cdkey;
pub mod job;
