//! # client
//!
//! Leptos + WASM frontend for the barbershop marketing site. A single
//! scrolling page: header with anchor navigation, hero banner, work gallery,
//! booking call-to-action, and a contact section with an embedded map.
//!
//! All page content is a static record (`content::SiteContent`); the only
//! mutable state is the mobile menu flag in `state::ui::UiState`.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entrypoint: hydrate the server-rendered page in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
