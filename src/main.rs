//! CoreNotes Frontend Entry Point

mod api;
mod app;
mod card;
mod colors;
mod components;
mod config;
mod context;
mod form;
mod inflight;
mod models;
mod store;
mod sync;
mod task_list;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    if let Err(err) = console_logger::init(config.log_level) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logger already installed: {}", err)));
    }
    log::info!("CoreNotes starting, api at {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config /> });
}
