#![allow(non_snake_case)]

use dioxus::prelude::*;
use stores::settings_store;

// Modules
mod components;
mod hooks;
mod routes;
mod services;
mod stores;
mod utils;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting linkshort web client");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Initialize stores on mount
    use_effect(move || {
        settings_store::init_settings();
    });

    rsx! {
        Router::<routes::Route> {}
    }
}
