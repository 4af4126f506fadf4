use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod content;
mod interaction;
mod components {
    pub mod clipboard;
    pub mod confetti;
    pub mod contact_card;
    pub mod evasive_cta;
    pub mod nav;
    pub mod process_carousel;
    pub mod sticky_cta;
    pub mod surfaces;
    pub mod timer;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <main class="not-found">
                    <h1>{"404"}</h1>
                    <p>{"This page wandered off the map."}</p>
                    <Link<Route> to={Route::Home} classes="nav-link">
                        {"Back to Code Compas"}
                    </Link<Route>>
                </main>
            }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
