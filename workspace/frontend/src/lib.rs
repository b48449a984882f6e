use yew::prelude::*;
use yew_router::prelude::*;

pub mod api_client;
mod components;
pub mod hooks;
pub mod router;
pub mod settings;
pub mod shared;

use components::shell::Shell;
use hooks::{NavContext, NavStore};
use settings::AppSettings;
use shared::toast::ToastProvider;

pub use router::Route;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub settings: AppSettings,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let navigation: NavContext = use_reducer(NavStore::default);

    html! {
        <ContextProvider<AppSettings> context={props.settings.clone()}>
            <ContextProvider<NavContext> context={navigation}>
                <ToastProvider duration_ms={props.settings.toast_duration_ms}>
                    <BrowserRouter>
                        <Shell />
                    </BrowserRouter>
                </ToastProvider>
            </ContextProvider<NavContext>>
        </ContextProvider<AppSettings>>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    let settings = AppSettings::from_environment();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== CropVision Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base_url());
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::with_props(AppProps { settings }).render();
    log::info!("Application initialized successfully");
}
