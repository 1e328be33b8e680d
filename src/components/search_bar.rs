//! Search Bar Component

use leptos::prelude::*;

/// Free-text search. Every keystroke is forwarded as-is.
#[component]
pub fn SearchBar(#[prop(into)] on_search: Callback<String>) -> impl IntoView {
    let (term, set_term) = signal(String::new());

    let update = move |value: String| {
        set_term.set(value.clone());
        on_search.run(value);
    };

    view! {
        <div class="search-bar">
            <input
                type="search"
                placeholder="Search notes..."
                prop:value=move || term.get()
                on:input=move |ev| update(event_target_value(&ev))
            />
            <Show when=move || !term.get().is_empty()>
                <button
                    type="button"
                    class="search-clear-btn"
                    title="Clear search"
                    on:click=move |_| update(String::new())
                >
                    "×"
                </button>
            </Show>
        </div>
    }
}
