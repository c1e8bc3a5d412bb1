use yew::prelude::*;
use yew_router::prelude::*;

pub mod api_client;
mod components;
pub mod settings;

use common::Page;
use components::dashboard::Dashboard;
use components::home::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Home => Route::Home,
            Page::Dashboard => Route::Dashboard,
        }
    }
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => {
            log::trace!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Dashboard => {
            log::trace!("Rendering Dashboard page");
            html! { <Dashboard /> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <h1>{"404 Not Found"}</h1> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== EnerDash Frontend Application Starting ===");
    log::debug!("API base URL: {}", settings.api_base_url());
    log::debug!("Debug mode: {}", settings.debug_mode);

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
