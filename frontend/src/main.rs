//! Thrive admin console: a Yew single-page app over the admin API.

mod api;
mod components;
mod config;
pub mod hooks;
#[cfg(feature = "mock")]
mod models;
mod pages;
mod router;
mod storage;
mod utils;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <router::AppRouter />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
