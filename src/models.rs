//! Frontend Models
//!
//! Data structures matching the notes API.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::colors::DEFAULT_COLOR;

/// Task (note) as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(alias = "_id", deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default = "default_color", deserialize_with = "color_or_default")]
    pub background_color: String,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub is_favorite: bool,
    #[serde(rename = "createdAt", default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default, deserialize_with = "lenient_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn color_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(default_color))
}

/// Ids arrive as strings from document stores and as numbers from SQL backends
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(id) if !id.is_empty() => Ok(id),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("invalid task id: {}", other))),
    }
}

/// `true`/`false`, 0/1 and null all count as a flag
fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(flag) => flag,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => matches!(s.trim(), "true" | "1"),
        _ => false,
    })
}

/// Unreadable timestamps become None instead of failing the whole task
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => parse_timestamp(&s),
        Value::Number(n) => n.as_i64().and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
        _ => None,
    })
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Decode a task list item by item. Entries that do not parse are logged
/// and skipped so one bad row does not blank the page.
pub fn decode_tasks(items: Vec<Value>) -> Vec<Task> {
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Task>(item) {
            Ok(task) => Some(task),
            Err(e) => {
                log::warn!("Skipping unreadable task: {}", e);
                None
            }
        })
        .collect()
}

/// A persisted change reported by a card to the page
#[derive(Debug, Clone, PartialEq)]
pub enum TaskChange {
    Favorite(bool),
    Color(String),
    Text { title: String, description: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskPatch {
    pub id: String,
    pub change: TaskChange,
}

impl TaskPatch {
    pub fn new(id: impl Into<String>, change: TaskChange) -> Self {
        Self { id: id.into(), change }
    }

    /// Apply to a single task. Returns false if the id does not match.
    pub fn apply_to(&self, task: &mut Task) -> bool {
        if task.id != self.id {
            return false;
        }
        match &self.change {
            TaskChange::Favorite(fav) => task.is_favorite = *fav,
            TaskChange::Color(color) => task.background_color = color.clone(),
            TaskChange::Text { title, description } => {
                task.title = title.clone();
                task.description = description.clone();
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_task() {
        let json = r#"{
            "_id": "65f1c0ffee",
            "title": "Buy milk",
            "description": "2 litres",
            "background_color": "bg-[#FFE8AC]",
            "is_favorite": true,
            "createdAt": "2024-03-13T10:00:00.000Z",
            "updatedAt": "2024-03-14T08:30:00.000Z"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, "65f1c0ffee");
        assert_eq!(task.background_color, "bg-[#FFE8AC]");
        assert!(task.is_favorite);
        assert_eq!(
            task.created_at.unwrap().to_rfc3339(),
            "2024-03-13T10:00:00+00:00"
        );
    }

    #[test]
    fn test_deserialize_sparse_task() {
        let json = r#"{"id": "7", "title": "Bread", "description": null, "background_color": null}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.description, "");
        assert_eq!(task.background_color, DEFAULT_COLOR);
        assert!(!task.is_favorite);
        assert!(task.updated_at.is_none());
    }

    #[test]
    fn test_deserialize_loose_task() {
        let json = r#"{
            "id": 42,
            "title": null,
            "is_favorite": 1,
            "createdAt": "yesterday",
            "updatedAt": "2024-03-14 08:30:00"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, "42");
        assert_eq!(task.title, "");
        assert!(task.is_favorite);
        assert!(task.created_at.is_none());
        assert_eq!(task.updated_at.unwrap().to_rfc3339(), "2024-03-14T08:30:00+00:00");

        let epoch: Task = serde_json::from_str(r#"{"id": "e", "createdAt": 0, "is_favorite": null}"#).unwrap();
        assert_eq!(epoch.created_at.unwrap().timestamp(), 0);
        assert!(!epoch.is_favorite);
    }

    #[test]
    fn test_decode_tasks_skips_bad_rows() {
        let items = vec![
            serde_json::json!({"id": "a", "title": "Keep"}),
            serde_json::json!({"title": "No id"}),
            serde_json::json!({"id": true, "title": "Bool id"}),
            serde_json::json!({"_id": 7, "title": "Numeric"}),
        ];
        let tasks = decode_tasks(items);
        let ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "7"]);
    }

    #[test]
    fn test_patch_only_touches_matching_id() {
        let mut task: Task = serde_json::from_str(r#"{"id": "a", "title": "t"}"#).unwrap();
        let other = TaskPatch::new("b", TaskChange::Favorite(true));
        assert!(!other.apply_to(&mut task));
        assert!(!task.is_favorite);

        let text = TaskPatch::new(
            "a",
            TaskChange::Text { title: "new".into(), description: "desc".into() },
        );
        assert!(text.apply_to(&mut task));
        assert_eq!(task.title, "new");
        assert_eq!(task.description, "desc");
    }
}
