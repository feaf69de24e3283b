//! Preference state shared by the display widgets.
//!
//! SYSTEM CONTEXT
//! ==============
//! State modules hold the mode/hue model, the persisted store, the resolved
//! document style, and the per-widget state that Leptos components drive.
//! Nothing here touches the DOM directly; browser access goes through the
//! seams in `crate::util`.

pub mod display_settings;
pub mod hue;
pub mod mode;
pub mod observable;
pub mod session;
pub mod store;
pub mod style;
pub mod switcher;
