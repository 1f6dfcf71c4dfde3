pub mod background;
pub mod components;
pub mod config;
pub mod countdown;
pub mod data;
pub mod error;
pub mod pages;
pub mod reveal;
pub mod trail;
pub mod utils;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::coming_soon::ComingSoon;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    ComingSoon,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::ComingSoon => html! { <ComingSoon /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::ComingSoon} /> },
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
