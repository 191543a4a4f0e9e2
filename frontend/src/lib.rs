#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use app::*;

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    // Only fails when a logger is already installed.
    let _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
