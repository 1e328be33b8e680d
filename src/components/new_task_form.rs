//! New Task Form Component
//!
//! Form for creating new notes with a pending favorite flag.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::form::{key_action, FormField, KeyAction, NewTaskDraft, SubmitStatus, ERROR_RESET_MS, SUCCESS_RESET_MS};
use crate::models::Task;

/// Form for creating a note. The created task is handed to `on_created`.
#[component]
pub fn NewTaskForm(#[prop(into)] on_created: Callback<Task>) -> impl IntoView {
    let ctx = use_app_context();

    let draft = RwSignal::new(NewTaskDraft::default());
    let description_ref = NodeRef::<leptos::html::Textarea>::new();

    let submit = move || {
        let Some(request) = draft.try_update(|d| d.begin_submit()).flatten() else {
            return;
        };
        spawn_local(async move {
            match ctx.api.create_task(&request).await {
                Ok(task) => {
                    log::info!("created task {}", task.id);
                    on_created.run(task);
                    draft.update(|d| d.submit_succeeded());
                    TimeoutFuture::new(SUCCESS_RESET_MS).await;
                    draft.update(|d| d.reset());
                }
                Err(err) => {
                    log::warn!("create task failed: {}", err);
                    draft.update(|d| d.submit_failed());
                    TimeoutFuture::new(ERROR_RESET_MS).await;
                    draft.update(|d| d.clear_error());
                }
            }
        });
    };

    let on_key = move |field: FormField, ev: web_sys::KeyboardEvent| {
        let action = draft.with_untracked(|d| key_action(field, &ev.key(), ev.shift_key(), d));
        match action {
            KeyAction::FocusDescription => {
                ev.prevent_default();
                if let Some(textarea) = description_ref.get() {
                    let _ = textarea.focus();
                }
            }
            KeyAction::Submit => {
                ev.prevent_default();
                submit();
            }
            KeyAction::None => {}
        }
    };

    let status = move || draft.with(|d| d.status());

    view! {
        <form
            class="new-task-form"
            on:submit=move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                submit();
            }
        >
            <div class="new-task-row">
                <input
                    type="text"
                    class="new-task-title"
                    placeholder="Title"
                    prop:value=move || draft.with(|d| d.title.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.title = value);
                    }
                    on:keydown=move |ev| on_key(FormField::Title, ev)
                />
                <button
                    type="button"
                    class=move || if draft.with(|d| d.favorite) { "favorite-btn active" } else { "favorite-btn" }
                    title="Add to favorites"
                    on:click=move |_| draft.update(|d| d.toggle_favorite())
                >
                    {move || if draft.with(|d| d.favorite) { "★" } else { "☆" }}
                </button>
            </div>

            <textarea
                class="new-task-description"
                placeholder="Take a note..."
                node_ref=description_ref
                prop:value=move || draft.with(|d| d.description.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| d.description = value);
                }
                on:keydown=move |ev| on_key(FormField::Description, ev)
            ></textarea>

            <button
                type="submit"
                class=move || status().class()
                disabled=move || status() != SubmitStatus::Idle
            >
                {move || status().label()}
            </button>
        </form>
    }
}
