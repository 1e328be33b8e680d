//! Task Section Component
//!
//! One titled group of note cards (favorites or others).

use leptos::prelude::*;

use crate::components::NoteCard;
use crate::models::{Task, TaskPatch};
use crate::store::{NotesStateStoreFields, NotesStore};

#[component]
pub fn TaskSection(
    #[prop(into)] title: String,
    #[prop(into)] tasks: Signal<Vec<Task>>,
    /// Shown when the group is empty
    #[prop(into)]
    empty_text: String,
    store: NotesStore,
    #[prop(into)] on_change: Callback<TaskPatch>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let count = move || tasks.with(|t| t.len());

    view! {
        <section class="task-section">
            <h2 class="task-section-title">
                {title} <span class="task-section-count">{count}</span>
            </h2>
            <Show
                when=move || !tasks.with(Vec::is_empty)
                fallback=move || view! { <p class="task-section-empty">{empty_text.clone()}</p> }
            >
                <div class="note-grid">
                    <For
                        each=move || tasks.get()
                        key=|task| task.id.clone()
                        children=move |task| {
                            let task_id = task.id.clone();
                            let leaving = Signal::derive(move || store.leaving().with(|l| l.contains(&task_id)));
                            view! {
                                <NoteCard
                                    task=task
                                    leaving=leaving
                                    on_change=on_change
                                    on_delete=on_delete
                                />
                            }
                        }
                    />
                </div>
            </Show>
        </section>
    }
}
