use yew::prelude::*;
use yew_router::prelude::*;

pub mod common;
pub mod components;
pub mod context;
pub mod hooks;
pub mod pages;
pub mod router;
pub mod settings;

pub use router::Route;

use common::toast::ToastProvider;
use context::{DatasetProvider, ThemeProvider};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <ThemeProvider>
                <DatasetProvider>
                    <BrowserRouter>
                        <Switch<Route> render={router::switch} />
                    </BrowserRouter>
                </DatasetProvider>
            </ThemeProvider>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Analytics Dashboard Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
