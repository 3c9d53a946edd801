use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod config;
pub mod content;
pub mod listener;
pub mod scroll_spy;
pub mod state;

pub mod components {
    pub mod footer;
    pub mod glow;
    pub mod icons;
    pub mod nav;
    pub mod side_nav;
}
pub mod sections {
    pub mod about;
    pub mod features;
    pub mod home;
    pub mod pricing;
}
pub mod pages {
    pub mod landing;
}

use crate::config::{NavMode, PageQuery};
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Picks the navigation strategy from `?nav=` and mounts the page.
#[function_component(LandingRoute)]
fn landing_route() -> Html {
    let mode = use_location()
        .and_then(|location| location.query::<PageQuery>().ok())
        .map(|query| query.nav_mode())
        .unwrap_or_default();

    html! { <Landing key={mode.to_string()} {mode} /> }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <LandingRoute /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting to landing page");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

pub fn start() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!(
        "Starting {} (default navigation: {})",
        config::PRODUCT_NAME,
        NavMode::default()
    );
    yew::Renderer::<App>::new().render();
}
