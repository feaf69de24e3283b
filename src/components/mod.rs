//! Leptos components for the display preference widgets.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the page-wide `DisplayPrefs` from Leptos context and drive
//! per-instance widget state from `crate::state`. Widget state is not `Send`,
//! so it lives in local `StoredValue`s owned by the component and is released
//! in `on_cleanup`.

pub mod display_settings;
pub mod light_dark_switch;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::state::session::DisplayPrefs;

/// Context handle for the shared preference context.
pub type PrefsHandle = StoredValue<DisplayPrefs, LocalStorage>;

/// Make `prefs` available to every component below the current owner.
pub fn provide_display_prefs(prefs: DisplayPrefs) -> PrefsHandle {
    let handle = StoredValue::new_local(prefs);
    provide_context(handle);
    handle
}

/// Shared preference context, if an ancestor provided one.
pub fn use_display_prefs() -> Option<DisplayPrefs> {
    use_context::<PrefsHandle>().and_then(|handle| handle.try_get_value())
}
