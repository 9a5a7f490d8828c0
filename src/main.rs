//! Dark Whale Frontend Entry Point

mod app;
mod calendar;
mod charts;
mod clients;
mod components;
mod config;
mod context;
mod error;
mod finance;
mod format;
mod ids;
mod kanban;
mod models;
mod money;
mod seed;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = config::load_config();
    if let Err(e) = rolling_logger::init_logger("DarkWhale", config.log_capacity, config.level_filter()) {
        web_sys::console::warn_1(&format!("Logger already installed: {}", e).into());
    }
    log::info!("Dark Whale starting, initial section {:?}", models::Section::Analytics);

    mount_to_body(move || view! { <App config=config /> });
}
