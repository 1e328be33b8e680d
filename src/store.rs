//! Task List Store
//!
//! Page-owned note list using Leptos reactive_stores for fine-grained reactivity.

use std::collections::HashSet;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Task, TaskPatch};
use crate::task_list;

/// Everything the list page renders from
#[derive(Clone, Debug, Default, Store)]
pub struct NotesState {
    /// Authoritative task list, in server order with new tasks appended
    pub tasks: Vec<Task>,
    /// Raw search term from the search bar
    pub search_term: String,
    /// Ids of cards playing their exit animation
    pub leaving: HashSet<String>,
    /// Initial fetch finished (successfully or not)
    pub loaded: bool,
}

pub type NotesStore = Store<NotesState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_set_tasks(store: &NotesStore, tasks: Vec<Task>) {
    store.tasks().set(tasks);
    store.loaded().set(true);
}

pub fn store_add_task(store: &NotesStore, task: Task) {
    task_list::insert_task(&mut store.tasks().write(), task);
}

pub fn store_apply_patch(store: &NotesStore, patch: &TaskPatch) {
    if !task_list::apply_patch(&mut store.tasks().write(), patch) {
        log::debug!("patch for unknown task {}", patch.id);
    }
}

/// Flag a card as leaving so it can animate out
pub fn store_mark_leaving(store: &NotesStore, task_id: &str) {
    store.leaving().write().insert(task_id.to_string());
}

pub fn store_remove_task(store: &NotesStore, task_id: &str) {
    task_list::remove_task(&mut store.tasks().write(), task_id);
    store.leaving().write().remove(task_id);
}

/// Visible (favorites, others) for the current search term
pub fn store_partition(store: &NotesStore) -> (Vec<Task>, Vec<Task>) {
    let term = store.search_term().get();
    store.tasks().with(|tasks| task_list::partition(tasks, &term))
}
