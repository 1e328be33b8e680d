//! Notes API Client
//!
//! HTTP bindings to the remote notes API, organized by resource.

mod error;
mod tasks;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::AppConfig;

pub use error::ApiError;

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Every endpoint answers with this envelope
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn into_data(self) -> Result<T, ApiError> {
        if !self.success {
            return Err(ApiError::Rejected { message: self.message });
        }
        self.data.ok_or(ApiError::MissingData)
    }

    pub fn into_ack(self) -> Result<(), ApiError> {
        if self.success {
            Ok(())
        } else {
            Err(ApiError::Rejected { message: self.message })
        }
    }
}

/// Handle to the notes API. Cheap to copy into event handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiClient {
    base_url: &'static str,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self { base_url: config.api_base_url.trim_end_matches('/') }
    }

    fn tasks_url(&self) -> String {
        format!("{}/api/tasks", self.base_url)
    }

    fn task_url(&self, id: &str) -> String {
        format!("{}/{}", self.tasks_url(), utf8_percent_encode(id, PATH_SEGMENT))
    }

    fn http(&self) -> reqwest::Client {
        reqwest::Client::new()
    }

    async fn send<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<ApiResponse<T>, ApiError> {
        let response = request.send().await?;
        Ok(response.json::<ApiResponse<T>>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    fn client(base: &'static str) -> ApiClient {
        ApiClient::new(&AppConfig { api_base_url: base, ..AppConfig::default() })
    }

    #[test]
    fn test_urls() {
        let api = client("https://notes.example.com/");
        assert_eq!(api.tasks_url(), "https://notes.example.com/api/tasks");
        assert_eq!(api.task_url("65f1c0ffee"), "https://notes.example.com/api/tasks/65f1c0ffee");
        assert_eq!(api.task_url("a/b c"), "https://notes.example.com/api/tasks/a%2Fb%20c");
    }

    #[test]
    fn test_envelope_success() {
        let resp: ApiResponse<Vec<u32>> = serde_json::from_str(r#"{"success": true, "data": [1, 2]}"#).unwrap();
        assert_eq!(resp.into_data().unwrap(), vec![1, 2]);

        let ack: ApiResponse<serde_json::Value> = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(ack.into_ack().is_ok());
    }

    #[test]
    fn test_envelope_with_task_data() {
        let resp: ApiResponse<Task> = serde_json::from_str(
            r#"{"success": true, "data": {"id": "9", "title": "Buy milk", "is_favorite": true}}"#,
        )
        .unwrap();
        let task = resp.into_data().unwrap();
        assert_eq!(task.title, "Buy milk");
        assert!(task.is_favorite);

        let missing: ApiResponse<Task> = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(matches!(missing.into_data(), Err(ApiError::MissingData)));
    }

    #[test]
    fn test_envelope_failure() {
        let resp: ApiResponse<serde_json::Value> =
            serde_json::from_str(r#"{"success": false, "message": "Task not found"}"#).unwrap();
        match resp.into_data() {
            Err(ApiError::Rejected { message }) => assert_eq!(message.as_deref(), Some("Task not found")),
            other => panic!("unexpected {:?}", other),
        }

        let empty: ApiResponse<serde_json::Value> = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(matches!(empty.into_data(), Err(ApiError::MissingData)));
    }
}
