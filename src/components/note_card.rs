//! Note Card Component
//!
//! One note with in-place editing, favorite toggle, color picker and delete.
//! Local state is seeded from `task` once and then owned by the card; each
//! action persists through its own request and reports back via `on_change`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::card::TextDraft;
use crate::colors::css_color;
use crate::components::ColorPicker;
use crate::context::use_app_context;
use crate::inflight::Operation;
use crate::models::{Task, TaskChange, TaskPatch};
use crate::sync::{Commit, Optimistic, SyncState};

#[component]
pub fn NoteCard(
    task: Task,
    /// Card is playing its exit animation
    #[prop(into)]
    leaving: Signal<bool>,
    #[prop(into)] on_change: Callback<TaskPatch>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let ctx = use_app_context();

    let id = StoredValue::new(task.id.clone());
    let favorite = RwSignal::new(Optimistic::new(task.is_favorite));
    let color = RwSignal::new(Optimistic::new(task.background_color.clone()));
    let draft = RwSignal::new(TextDraft::from_task(&task));
    let (show_picker, set_show_picker) = signal(false);
    let (deleting, set_deleting) = signal(false);

    let stamp = task
        .updated_at
        .or(task.created_at)
        .map(|at| at.format("%b %-d, %Y").to_string());

    // Favorite only flips once the server agrees
    let toggle_favorite = move |_| {
        let task_id = id.get_value();
        let next = !favorite.with_untracked(|f| *f.value());
        if !ctx.try_begin(&task_id, Operation::Favorite) {
            return;
        }
        if !favorite.try_update(|f| f.begin(next, Commit::OnConfirm)).unwrap_or(false) {
            ctx.finish(&task_id, Operation::Favorite);
            return;
        }
        spawn_local(async move {
            let result = ctx.api.set_favorite(&task_id, next).await;
            ctx.finish(&task_id, Operation::Favorite);
            match result {
                Ok(()) => {
                    favorite.try_update(|f| f.confirm());
                    on_change.run(TaskPatch::new(task_id, TaskChange::Favorite(next)));
                }
                Err(err) => {
                    log::warn!("favorite {} failed: {}", task_id, err);
                    favorite.try_update(|f| f.revert());
                }
            }
        });
    };

    // Color shows immediately and rolls back on failure
    let pick_color = move |next: String| {
        set_show_picker.set(false);
        let task_id = id.get_value();
        if !ctx.try_begin(&task_id, Operation::Color) {
            return;
        }
        if !color.try_update(|c| c.begin(next.clone(), Commit::Immediate)).unwrap_or(false) {
            ctx.finish(&task_id, Operation::Color);
            return;
        }
        spawn_local(async move {
            let result = ctx.api.set_color(&task_id, &next).await;
            ctx.finish(&task_id, Operation::Color);
            match result {
                Ok(_) => {
                    color.try_update(|c| c.confirm());
                    on_change.run(TaskPatch::new(task_id, TaskChange::Color(next)));
                }
                Err(err) => {
                    log::warn!("color {} failed: {}", task_id, err);
                    color.try_update(|c| c.revert());
                }
            }
        });
    };

    let save = move || {
        let task_id = id.get_value();
        if !ctx.try_begin(&task_id, Operation::Text) {
            return;
        }
        let Some(update) = draft.try_update(|d| d.begin_save()).flatten() else {
            ctx.finish(&task_id, Operation::Text);
            return;
        };
        spawn_local(async move {
            let result = ctx.api.update_text(&task_id, &update).await;
            ctx.finish(&task_id, Operation::Text);
            match result {
                Ok(()) => {
                    draft.try_update(|d| d.save_succeeded(&update));
                    on_change.run(TaskPatch::new(
                        task_id,
                        TaskChange::Text { title: update.title, description: update.description },
                    ));
                }
                Err(err) => {
                    log::warn!("save {} failed: {}", task_id, err);
                    draft.try_update(|d| d.save_failed());
                }
            }
        });
    };

    let delete = move |_| {
        let task_id = id.get_value();
        if !ctx.try_begin(&task_id, Operation::Delete) {
            return;
        }
        set_deleting.set(true);
        spawn_local(async move {
            let result = ctx.api.delete_task(&task_id).await;
            ctx.finish(&task_id, Operation::Delete);
            match result {
                Ok(()) => on_delete.run(task_id),
                Err(err) => {
                    log::warn!("delete {} failed: {}", task_id, err);
                    set_deleting.try_set(false);
                }
            }
        });
    };

    let on_edit_key = move |ev: web_sys::KeyboardEvent| {
        match ev.key().as_str() {
            "Escape" => draft.update(|d| d.cancel()),
            "Enter" if ev.ctrl_key() || ev.meta_key() => {
                ev.prevent_default();
                save();
            }
            _ => {}
        }
    };

    let editing = move || draft.with(|d| d.is_editing());
    let is_favorite = move || favorite.with(|f| *f.value());

    let card_class = move || {
        let mut c = String::from("note-card");
        if leaving.get() {
            c.push_str(" leaving");
        }
        if deleting.get() {
            c.push_str(" deleting");
        }
        if color.with(|o| o.is_pending()) || favorite.with(|f| f.is_pending()) || draft.with(|d| d.is_saving()) {
            c.push_str(" syncing");
        }
        // Plays a one-shot shake after a rejected color or favorite change
        let reverted = color.with(|o| *o.state() == SyncState::Reverted)
            || favorite.with(|f| *f.state() == SyncState::Reverted);
        if reverted {
            c.push_str(" reverted");
        }
        c
    };
    let card_style = move || color.with(|c| format!("background-color: {};", css_color(c.value())));

    view! {
        <article class=card_class style=card_style>
            <header class="note-card-header">
                <Show
                    when=editing
                    fallback=move || view! {
                        <h3 class="note-title">{move || draft.with(|d| d.saved_title().to_string())}</h3>
                    }
                >
                    <input
                        type="text"
                        class="note-title-input"
                        prop:value=move || draft.with(|d| d.title.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.title = value);
                        }
                        on:keydown=on_edit_key
                    />
                </Show>
                <Show when=move || !editing()>
                    <button
                        class=move || if is_favorite() { "favorite-btn active" } else { "favorite-btn" }
                        title=move || if is_favorite() { "Remove from favorites" } else { "Add to favorites" }
                        on:click=toggle_favorite
                    >
                        {move || if is_favorite() { "★" } else { "☆" }}
                    </button>
                </Show>
            </header>

            <Show
                when=editing
                fallback=move || view! {
                    <p class="note-description">{move || draft.with(|d| d.saved_description().to_string())}</p>
                }
            >
                <textarea
                    class="note-description-input"
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.description = value);
                    }
                    on:keydown=on_edit_key
                ></textarea>
            </Show>

            <footer class="note-card-footer">
                {stamp.map(|s| view! { <time class="note-date">{s}</time> })}
                <div class="note-actions">
                    <button
                        class="palette-btn"
                        title="Change color"
                        on:click=move |_| set_show_picker.update(|v| *v = !*v)
                    >
                        "🎨"
                    </button>
                    <button class="edit-btn" on:click=move |_| draft.update(|d| d.toggle_edit())>
                        {move || if editing() { "Cancel" } else { "Edit" }}
                    </button>
                    <Show when=editing>
                        <button class="save-btn" on:click=move |_| save()>"Save"</button>
                    </Show>
                    <button class="delete-btn" title="Delete" on:click=delete>"×"</button>
                </div>
            </footer>

            <Show when=move || show_picker.get()>
                <ColorPicker
                    selected=Signal::derive(move || color.with(|c| c.value().clone()))
                    on_pick=pick_color
                />
            </Show>
        </article>
    }
}
