//! # client
//!
//! Leptos + WASM frontend for the Eternal Moments wedding planning site.
//!
//! The server renders every page to HTML first; this crate hydrates the
//! document in the browser and takes over routing, filtering, and form
//! handling. Catalog data arrives once per app load from `/api/content`
//! and is shared with every page through a context signal.
//!
//! ARCHITECTURE
//! ============
//! - `app`: root component, router, context providers
//! - `pages`: one component per route
//! - `components`: shared chrome (header, footer, toast) and cards
//! - `state`: context structs behind `RwSignal`s
//! - `net`: REST calls to the server API
//! - `util`: pure helpers kept small and testable

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point. cargo-leptos invokes this export after loading
/// the WASM bundle into the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
