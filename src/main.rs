//! Board Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod connect;
mod connectors;
mod context;
mod error;
mod layout;
mod leader_line;
mod models;
mod search;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }
    mount_to_body(App);
}
