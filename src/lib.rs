//! # display-prefs
//!
//! Light/dark/auto mode and accent hue preferences for a Leptos + WASM site.
//!
//! The crate keeps the user's mode and hue in browser storage, follows the
//! operating system color scheme while the mode is `Auto`, and renders the
//! result onto the `<html>` element as a `data-theme` attribute and a
//! `--hue` custom property. Two widgets drive it: a mode switcher and a hue
//! settings panel. Several widget instances may be mounted at once and stay
//! in step.
//!
//! Browser access only exists with the `hydrate` feature. Without it every
//! browser seam degrades to a no-op, so the same state code runs under SSR
//! and in native tests.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod state;
pub mod util;

pub use config::PrefsConfig;
pub use error::PrefsError;
pub use state::hue::{DEFAULT_HUE, Hue};
pub use state::mode::{EffectiveMode, Mode};
pub use state::session::{DisplayPrefs, Selection};
pub use state::store::{Persisted, PreferenceStore};
pub use state::style::{DocumentStyleState, StyleApplier};

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    let config = PrefsConfig::from_embedded().unwrap_or_else(|err| {
        log::warn!("embedded display prefs config unreadable, using defaults: {err}");
        PrefsConfig::default()
    });
    leptos::mount::hydrate_body(move || view! { <App config/> });
}
