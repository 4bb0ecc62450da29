//! Avara marketing site — Yew WASM frontend.

use wasm_bindgen::prelude::*;
use yew::prelude::*;

pub mod components;
pub mod content;
pub mod pages;
pub mod timeline;

use crate::pages::landing::Landing;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <Landing />
    }
}

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn start() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("avara landing starting");
    yew::Renderer::<App>::new().render();
}
