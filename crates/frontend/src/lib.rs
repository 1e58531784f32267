pub mod app;
pub mod domain;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate, level taken from config.toml
    let config = shared::config::load_config();
    let level = config
        .as_ref()
        .map(|c| c.logging.level())
        .unwrap_or(log::Level::Debug);
    _ = console_log::init_with_level(level);
    if let Err(e) = &config {
        log::error!("{}; falling back to defaults", e);
    }
    console_error_panic_hook::set_once();

    log::info!("API base: {}", shared::api_utils::api_base());
    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
