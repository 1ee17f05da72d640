//! Pokémon Reports Dashboard - Yew WASM frontend.
//!
//! Browser UI for requesting, listing, and deleting Pokémon reports produced
//! by an external backend service.

mod api;
mod app;
mod components;
mod log;
mod pages;
mod settings;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    yew::Renderer::<App>::new().render();
}
