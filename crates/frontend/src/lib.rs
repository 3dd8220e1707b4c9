pub mod app;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::config::load_config;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    spawn_local(async {
        let config = load_config().await;
        leptos::mount::mount_to_body(move || view! { <app::App config=config /> });
    });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
