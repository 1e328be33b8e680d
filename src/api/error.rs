//! API Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Network failure or a body that is not the expected JSON
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered `success: false`
    #[error("request rejected{}", .message.as_deref().map(|m| format!(": {}", m)).unwrap_or_default())]
    Rejected { message: Option<String> },

    /// `success: true` but no `data` where one was expected
    #[error("response is missing data")]
    MissingData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let with_message = ApiError::Rejected { message: Some("Task not found".to_string()) };
        assert_eq!(with_message.to_string(), "request rejected: Task not found");
        assert_eq!(ApiError::Rejected { message: None }.to_string(), "request rejected");
        assert_eq!(ApiError::MissingData.to_string(), "response is missing data");
    }
}
