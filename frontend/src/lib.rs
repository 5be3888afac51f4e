pub mod api;
pub mod auth;
pub mod components;
pub mod config;
pub mod fb_api;
pub mod hooks;
pub mod install;
pub mod models;
pub mod pages;
pub mod report;
pub mod screen;
pub mod styles;
pub mod ua;

use crate::pages::activity::ActivityPage;
use crate::pages::not_found::{ActivityNotFound, NotFound};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/activity/:id")]
    Activity { id: u64 },
    #[at("/activity")]
    ActivityIndex,
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen w-full">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Activity { id } => html! { <ActivityPage {id} /> },
        // The sentinel-code fallback route and the bare root both land on
        // the terminal screen; there is no activity catalogue to show.
        Route::ActivityIndex | Route::Home => html! { <ActivityNotFound /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
