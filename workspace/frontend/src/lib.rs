use yew::prelude::*;

mod components;
pub mod api_client;
pub mod hooks;
pub mod common;
pub mod settings;

use components::forecast::Forecast;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="container mx-auto p-6">
            <h1 class="text-3xl font-bold mb-6">{"Gold Price Forecast"}</h1>
            <Forecast />
        </div>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Gold Forecast Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Prediction endpoint: {}", settings.predict_url());
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
