//! Task Endpoints
//!
//! `/api/tasks` CRUD calls.

use serde::Serialize;
use serde_json::Value;

use super::{ApiClient, ApiError};
use crate::card::TextUpdate;
use crate::form::NewTask;
use crate::models::{decode_tasks, Task};

// ========================
// Request Bodies
// ========================

#[derive(Serialize)]
struct FavoriteBody {
    is_favorite: bool,
}

#[derive(Serialize)]
struct ColorBody<'a> {
    background_color: &'a str,
}

#[derive(Serialize)]
struct TextBody<'a> {
    title: &'a str,
    description: &'a str,
}

// ========================
// Calls
// ========================

impl ApiClient {
    pub async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let request = self.http().get(self.tasks_url());
        let items = Self::send::<Vec<Value>>(request).await?.into_data()?;
        Ok(decode_tasks(items))
    }

    pub async fn create_task(&self, task: &NewTask) -> Result<Task, ApiError> {
        let request = self.http().post(self.tasks_url()).json(task);
        Self::send::<Task>(request).await?.into_data()
    }

    pub async fn set_favorite(&self, id: &str, is_favorite: bool) -> Result<(), ApiError> {
        let request = self.http().patch(self.task_url(id)).json(&FavoriteBody { is_favorite });
        Self::send::<Value>(request).await?.into_ack()
    }

    /// Returns the server's copy of the task when it sends one back
    pub async fn set_color(&self, id: &str, background_color: &str) -> Result<Option<Task>, ApiError> {
        let request = self.http().put(self.task_url(id)).json(&ColorBody { background_color });
        let response = Self::send::<Task>(request).await?;
        if !response.success {
            return Err(ApiError::Rejected { message: response.message });
        }
        Ok(response.data)
    }

    pub async fn update_text(&self, id: &str, update: &TextUpdate) -> Result<(), ApiError> {
        let body = TextBody { title: &update.title, description: &update.description };
        let request = self.http().put(self.task_url(id)).json(&body);
        Self::send::<Value>(request).await?.into_ack()
    }

    pub async fn delete_task(&self, id: &str) -> Result<(), ApiError> {
        let request = self.http().delete(self.task_url(id));
        Self::send::<Value>(request).await?.into_ack()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_body_shapes() {
        assert_eq!(serde_json::to_value(FavoriteBody { is_favorite: true }).unwrap(), json!({"is_favorite": true}));
        assert_eq!(
            serde_json::to_value(ColorBody { background_color: "teal" }).unwrap(),
            json!({"background_color": "teal"})
        );
        assert_eq!(
            serde_json::to_value(TextBody { title: "t", description: "" }).unwrap(),
            json!({"title": "t", "description": ""})
        );
    }
}
