// services/sentinel-dash/src/main.rs
//
// Sentinel Console - Border surveillance operations dashboard
// 🛰️ "Eyes on the northern frontier"
//

mod app;
mod components;
mod config;
mod sim;
mod state;

use leptos::*;

fn main() {
    // Better panic messages in browser console
    console_error_panic_hook::set_once();

    // Initialize logging
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🛰️ Sentinel Console starting...");

    // Mount Leptos app
    mount_to_body(|| {
        view! { <app::App /> }
    });
}
