//! Task List Utilities
//!
//! Search filtering, favorites/others grouping and in-place list edits.

use crate::models::{Task, TaskPatch};

/// Case-insensitive substring match on the title. Blank terms match all.
pub fn matches_search(task: &Task, term: &str) -> bool {
    let term = term.trim();
    term.is_empty() || task.title.to_lowercase().contains(&term.to_lowercase())
}

/// Tasks matching `term`, split into (favorites, others), order preserved
pub fn partition(tasks: &[Task], term: &str) -> (Vec<Task>, Vec<Task>) {
    tasks
        .iter()
        .filter(|task| matches_search(task, term))
        .cloned()
        .partition(|task| task.is_favorite)
}

/// Appends to the end. A task whose id is already present is replaced in place.
pub fn insert_task(tasks: &mut Vec<Task>, task: Task) {
    match tasks.iter_mut().find(|t| t.id == task.id) {
        Some(existing) => *existing = task,
        None => tasks.push(task),
    }
}

pub fn remove_task(tasks: &mut Vec<Task>, task_id: &str) -> bool {
    let before = tasks.len();
    tasks.retain(|t| t.id != task_id);
    tasks.len() != before
}

pub fn apply_patch(tasks: &mut [Task], patch: &TaskPatch) -> bool {
    tasks.iter_mut().any(|task| patch.apply_to(task))
}
