//! CoreNotes App
//!
//! Root component and the task list page.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::components::{NewTaskForm, SearchBar, TaskSection};
use crate::config::AppConfig;
use crate::context::{use_app_context, AppContext};
use crate::models::{Task, TaskPatch};
use crate::store::{
    store_add_task, store_apply_patch, store_mark_leaving, store_partition, store_remove_task, store_set_tasks,
    NotesState, NotesStateStoreFields,
};

/// Length of the card exit animation (matches `.note-card.leaving` in the stylesheet)
pub const EXIT_ANIMATION_MS: u32 = 250;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(AppContext::new(ApiClient::new(&config)));

    view! {
        <div class="app-layout">
            <h1 class="app-title">"CoreNotes"</h1>
            <TaskListPage />
        </div>
    }
}

/// Owns the task list: fetches once, filters, and renders both groups
#[component]
pub fn TaskListPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = Store::new(NotesState::default());

    // Load tasks on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match ctx.api.list_tasks().await {
                Ok(tasks) => {
                    log::info!("loaded {} tasks", tasks.len());
                    store_set_tasks(&store, tasks);
                }
                Err(err) => {
                    log::warn!("loading tasks failed: {}", err);
                    store.loaded().set(true);
                }
            }
        });
    });

    let groups = Memo::new(move |_| store_partition(&store));
    let favorites = Signal::derive(move || groups.with(|(favorites, _)| favorites.clone()));
    let others = Signal::derive(move || groups.with(|(_, others)| others.clone()));

    let on_search = Callback::new(move |term: String| store.search_term().set(term));
    let on_created = Callback::new(move |task: Task| store_add_task(&store, task));
    let on_change = Callback::new(move |patch: TaskPatch| store_apply_patch(&store, &patch));
    let on_delete = Callback::new(move |task_id: String| {
        store_mark_leaving(&store, &task_id);
        spawn_local(async move {
            TimeoutFuture::new(EXIT_ANIMATION_MS).await;
            store_remove_task(&store, &task_id);
        });
    });

    let visible = move || groups.with(|(f, o)| f.len() + o.len());
    let total = move || store.tasks().with(|t| t.len());

    view! {
        <main class="main-content">
            <SearchBar on_search=on_search />
            <NewTaskForm on_created=on_created />

            <Show when=move || store.loaded().get() fallback=|| view! { <p class="loading">"Loading notes..."</p> }>
                <TaskSection
                    title="Favorites"
                    tasks=favorites
                    empty_text="No favorite notes"
                    store=store
                    on_change=on_change
                    on_delete=on_delete
                />
                <TaskSection
                    title="Others"
                    tasks=others
                    empty_text="No notes"
                    store=store
                    on_change=on_change
                    on_delete=on_delete
                />
            </Show>

            <p class="item-count">{move || format!("{} of {} notes", visible(), total())}</p>
        </main>
    }
}
