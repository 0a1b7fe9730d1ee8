//! HTTP implementation of [`ImageProvider`].

use async_trait::async_trait;
use pawsona_core::error::{CoreError, CoreResult};

use crate::api::{QueryTaskResponse, SubmitTaskRequest, SubmitTaskResponse};
use crate::{ImageProvider, TaskState};

/// Default API origin when `AI_API_BASE_URL` is unset.
const DEFAULT_BASE_URL: &str = "https://api.bltcy.ai";

/// Model fallback order: fastest first, most stable last.
const DEFAULT_MODELS: [&str; 3] = ["nano-banana-2-2k", "nano-banana-2-4k", "nano-banana-2"];

/// Requested output dimensions for the card portrait.
const IMAGE_SIZE: &str = "768x1024";

/// Connection settings for the provider API.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    pub api_key: String,
    /// Models to try in order; submission falls through to the next on
    /// a non-success response.
    pub models: Vec<String>,
}

impl ProviderConfig {
    /// Read configuration from `AI_API_BASE_URL`, `AI_API_KEY`, and
    /// `AI_MODELS` (comma-separated, optional).
    pub fn from_env() -> CoreResult<Self> {
        let api_key = std::env::var("AI_API_KEY")
            .map_err(|_| CoreError::Provider("AI_API_KEY is not set".to_string()))?;
        let base_url =
            std::env::var("AI_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let models: Vec<String> = match std::env::var("AI_MODELS") {
            Ok(raw) => raw
                .split(',')
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty())
                .collect(),
            Err(_) => DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
        };
        if models.is_empty() {
            return Err(CoreError::Provider("AI_MODELS is empty".to_string()));
        }
        Ok(Self {
            base_url,
            api_key,
            models,
        })
    }
}

/// [`ImageProvider`] over the provider's HTTP task API.
pub struct HttpImageProvider {
    client: reqwest::Client,
    config: ProviderConfig,
}

impl HttpImageProvider {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Reuse an existing [`reqwest::Client`] for connection pooling.
    pub fn with_client(client: reqwest::Client, config: ProviderConfig) -> Self {
        Self { client, config }
    }

    async fn try_submit(&self, model: &str, prompt: &str, pet_image: &str) -> CoreResult<String> {
        let body = SubmitTaskRequest {
            model,
            prompt,
            image: pet_image,
            n: 1,
            size: IMAGE_SIZE,
        };
        let response = self
            .client
            .post(format!("{}/v1/images/tasks", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| CoreError::Provider(format!("submission request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(CoreError::Provider(format!(
                "{model} submission rejected ({status}): {detail}"
            )));
        }

        let parsed: SubmitTaskResponse = response
            .json()
            .await
            .map_err(|e| CoreError::Provider(format!("malformed submission response: {e}")))?;
        Ok(parsed.task_id)
    }
}

#[async_trait]
impl ImageProvider for HttpImageProvider {
    async fn submit(&self, prompt: &str, pet_image: &str) -> CoreResult<String> {
        let mut last_error = None;
        for model in &self.config.models {
            match self.try_submit(model, prompt, pet_image).await {
                Ok(task_id) => {
                    tracing::info!(model, task_id = %task_id, "generation task submitted");
                    return Ok(task_id);
                }
                Err(e) => {
                    tracing::warn!(model, error = %e, "model submission failed, trying next");
                    last_error = Some(e);
                }
            }
        }
        Err(last_error
            .unwrap_or_else(|| CoreError::Provider("no models configured".to_string())))
    }

    async fn query(&self, task_id: &str) -> CoreResult<TaskState> {
        let response = self
            .client
            .get(format!(
                "{}/v1/images/tasks/{task_id}",
                self.config.base_url
            ))
            .bearer_auth(&self.config.api_key)
            .send()
            .await
            .map_err(|e| CoreError::Provider(format!("status request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(CoreError::Provider(format!(
                "status query rejected ({status}): {detail}"
            )));
        }

        let parsed: QueryTaskResponse = response
            .json()
            .await
            .map_err(|e| CoreError::Provider(format!("malformed status response: {e}")))?;

        match parsed.status.as_str() {
            "succeeded" => {
                let image = parsed
                    .data
                    .into_iter()
                    .next()
                    .and_then(|i| i.into_persistable())
                    .ok_or_else(|| {
                        CoreError::Provider("succeeded task carried no image".to_string())
                    })?;
                Ok(TaskState::Succeeded(image))
            }
            "failed" => {
                let message = parsed
                    .error
                    .map(|e| e.message)
                    .unwrap_or_else(|| "generation failed".to_string());
                Ok(TaskState::Failed(message))
            }
            "pending" | "running" => Ok(TaskState::InProgress),
            other => Err(CoreError::Provider(format!(
                "unknown task status '{other}'"
            ))),
        }
    }
}
