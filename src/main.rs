mod components;
mod config;
mod hooks;
mod models;
mod services;
mod utils;
mod viewmodels;

use components::App;
use config::CONFIG;

fn main() {
    console_error_panic_hook::set_once();
    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("🚀 Cancha Finder starting ({})...", CONFIG.environment);

    yew::Renderer::<App>::new().render();
}
