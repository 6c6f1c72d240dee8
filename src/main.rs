//! Storefront Admin Entry Point

mod actions;
mod api;
mod app;
mod components;
mod config;
mod context;
mod dialogs;
mod error;
mod forms;
mod loader;
mod logging;
mod models;
mod notify;
mod state;
mod store;
mod view;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// Recent log lines, callable from the devtools console as `adminLogs()`
#[wasm_bindgen(js_name = adminLogs)]
pub fn admin_logs() -> String {
    logging::recent_lines().join("\n")
}

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_window();
    logging::init(config.log_level);
    log::info!("storefront admin starting against {}", config.api_base);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
