//! Kanban Board Frontend Entry Point

mod app;
mod commands;
mod components;
mod features;
mod models;
mod pages;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
