//! Client for the external image-generation provider.
//!
//! The provider runs an asynchronous task protocol: submit a prompt
//! plus reference photo, get back a task handle, then poll the handle
//! until it settles. Everything downstream depends only on the
//! [`ImageProvider`] trait, so tests substitute scripted fakes and the
//! HTTP client in [`client`] stays at the edge.

pub mod api;
pub mod client;

use async_trait::async_trait;
use pawsona_core::error::CoreResult;

pub use client::{HttpImageProvider, ProviderConfig};

/// Outcome of polling a provider task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskState {
    /// The task finished; carries the generated image URL or data URL.
    Succeeded(String),
    /// The task is still queued or running.
    InProgress,
    /// The task failed on the provider side, with its message.
    Failed(String),
}

/// Submit-and-poll interface to the image generator.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Submit a generation task. `pet_image` is the user's reference
    /// photo, either a URL or an inline `data:image/...` payload.
    /// Returns the provider's task handle.
    async fn submit(&self, prompt: &str, pet_image: &str) -> CoreResult<String>;

    /// Query the current state of a previously submitted task.
    async fn query(&self, task_id: &str) -> CoreResult<TaskState>;
}
