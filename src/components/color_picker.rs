//! Color Picker Component
//!
//! Swatch row for choosing a note's background color.

use leptos::prelude::*;

use crate::colors::{same_color, PALETTE};

#[component]
pub fn ColorPicker(
    #[prop(into)] selected: Signal<String>,
    #[prop(into)] on_pick: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="color-picker">
            {PALETTE.iter().map(|(token, label, css)| {
                let token = token.to_string();
                let pick = token.clone();
                let is_selected = move || selected.with(|s| same_color(s, &token));
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "color-swatch selected" } else { "color-swatch" }
                        style=format!("background-color: {};", css)
                        title=*label
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_pick.run(pick.clone());
                        }
                    ></button>
                }
            }).collect_view()}
        </div>
    }
}
