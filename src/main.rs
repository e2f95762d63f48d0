use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod counter;
mod i18n;
mod partners;
mod scroll;

mod components {
    pub mod faq;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod how_it_works;
    pub mod icons;
    pub mod partners;
    pub mod scan_win;
    pub mod stats;
}

mod pages {
    pub mod home;
}

use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            html! { <Redirect<Route> to={Route::Home} /> }
        }
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
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
