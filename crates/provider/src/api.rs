//! Wire types for the provider's asynchronous task API.

use serde::{Deserialize, Serialize};

/// Body for `POST /v1/images/tasks`.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitTaskRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    /// Reference photo: a URL or inline `data:image/...` payload.
    pub image: &'a str,
    pub n: u32,
    pub size: &'a str,
}

/// Response from a successful task submission.
#[derive(Debug, Deserialize)]
pub struct SubmitTaskResponse {
    pub task_id: String,
}

/// Response from `GET /v1/images/tasks/{id}`.
#[derive(Debug, Deserialize)]
pub struct QueryTaskResponse {
    /// `pending`, `running`, `succeeded`, or `failed`.
    pub status: String,
    /// Present once `status` is `succeeded`.
    #[serde(default)]
    pub data: Vec<TaskImage>,
    /// Present once `status` is `failed`.
    #[serde(default)]
    pub error: Option<TaskError>,
}

/// One generated image in a query response. The provider returns either
/// a hosted URL or an inline base64 payload.
#[derive(Debug, Deserialize)]
pub struct TaskImage {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub b64_json: Option<String>,
}

impl TaskImage {
    /// The image as a string the job store can persist directly.
    pub fn into_persistable(self) -> Option<String> {
        if let Some(url) = self.url {
            return Some(url);
        }
        self.b64_json
            .map(|b64| format!("data:image/png;base64,{b64}"))
    }
}

/// Provider-side failure detail.
#[derive(Debug, Deserialize)]
pub struct TaskError {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_response_tolerates_missing_fields() {
        let parsed: QueryTaskResponse = serde_json::from_str(r#"{"status":"running"}"#).unwrap();
        assert_eq!(parsed.status, "running");
        assert!(parsed.data.is_empty());
        assert!(parsed.error.is_none());
    }

    #[test]
    fn inline_images_become_data_urls() {
        let image = TaskImage {
            url: None,
            b64_json: Some("QUJD".to_string()),
        };
        assert_eq!(
            image.into_persistable().unwrap(),
            "data:image/png;base64,QUJD"
        );
    }

    #[test]
    fn hosted_url_wins_over_inline_payload() {
        let image = TaskImage {
            url: Some("https://cdn.example/pet.png".to_string()),
            b64_json: Some("QUJD".to_string()),
        };
        assert_eq!(
            image.into_persistable().unwrap(),
            "https://cdn.example/pet.png"
        );
    }
}
