//! # site-ui
//!
//! Client-side UI enhancements for a static website, compiled to WebAssembly:
//! an image lightbox overlay and a light/dark theme toggle persisted in
//! browser local storage.
//!
//! The two components are independent and share no runtime state. Everything
//! that touches the DOM lives behind the `web` feature; the state and
//! decision logic underneath compiles and tests natively.

pub mod config;
pub mod lightbox;
pub mod storage;
pub mod theme;

#[cfg(feature = "web")]
pub mod dom;

#[cfg(feature = "web")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Module entry point, run once when the page loads the WASM bundle.
///
/// The bundle is loaded as a deferred module script, so the document is
/// already parsed by the time this runs.
#[cfg(feature = "web")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = config::Config::default();
    theme::install(&config);
    if lightbox::install(&config).is_none() {
        log::debug!("lightbox not installed: document unavailable");
    }
}
