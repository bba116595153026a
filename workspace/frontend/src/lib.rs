use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod mock_data;
pub mod api_client;
pub mod hooks;
pub mod common;
pub mod settings;

use crate::common::toast::ToastProvider;
use components::cashback::CashbackView;
use components::layout::layout::Layout;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/cashback")]
    Cashback,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => {
            html! { <Redirect<Route> to={Route::Cashback} /> }
        }
        Route::Cashback => {
            log::trace!("Rendering Cashback page");
            html! { <Layout title="Cashback Rewards"><CashbackView /></Layout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! {
                <Layout title="404">
                    <div class="flex flex-col items-center gap-4 py-12">
                        <h1 class="text-2xl font-bold">{"Page not found"}</h1>
                        <Link<Route> to={Route::Cashback} classes="btn btn-primary">{"Back to cashback"}</Link<Route>>
                    </div>
                </Layout>
            }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Settings decide the log level, so load them first
    settings::init_settings();

    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Cashback Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base_url());

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
