//! # client
//!
//! Leptos frontend for the NASA Mars Rover Photo Viewer.
//!
//! This crate contains the root view, the rover selector component, the
//! selector state machine, the rover wire types and the configuration for the
//! rover API endpoint. It renders on the server (`ssr`) and hydrates in the
//! browser (`hydrate`).

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;

/// Browser entry point: reads the endpoint configuration embedded in the SSR
/// shell and hydrates the root view.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    match config::RoverApiConfig::from_document() {
        Ok(config) => {
            leptos::mount::hydrate_body(move || view! { <app::App config/> });
        }
        Err(e) => log::error!("cannot hydrate rover viewer: {e}"),
    }
}
