//! Task-List Manager Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod models;
mod route;
mod session;
mod store;
mod task_table;
mod validate;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(config::ApiConfig::from_env().console_level());
    mount_to_body(App);
}
