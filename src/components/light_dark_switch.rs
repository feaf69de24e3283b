//! Light/dark/auto toggle button with a hover panel of explicit choices.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each mounted switch owns a `ModeSwitcher`, which holds its own system
//! preference subscription. Several switches (desktop header, mobile drawer)
//! stay in step through the shared selection cell.

use leptos::prelude::*;

#[cfg(test)]
#[path = "light_dark_switch_test.rs"]
mod light_dark_switch_test;

use super::use_display_prefs;
use crate::state::mode::Mode;
use crate::state::switcher::ModeSwitcher;

/// Glyph shown for `mode` on the toggle button and in the panel.
pub fn mode_glyph(mode: Mode) -> &'static str {
    match mode {
        Mode::Light => "☀",
        Mode::Dark => "☾",
        Mode::Auto => "◐",
    }
}

/// Human-readable label for a panel entry.
pub fn mode_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Light => "Light",
        Mode::Dark => "Dark",
        Mode::Auto => "System",
    }
}

/// Mode switch for the page header.
#[component]
pub fn LightDarkSwitch() -> impl IntoView {
    let Some(prefs) = use_display_prefs() else {
        log::warn!("LightDarkSwitch rendered without display prefs context");
        return ().into_any();
    };

    let mode = RwSignal::new(prefs.initial_selection().mode);
    let panel_open = RwSignal::new(false);

    let switcher = StoredValue::new_local(ModeSwitcher::mount(&prefs, move |next| {
        let _ = mode.try_set(next);
    }));
    on_cleanup(move || {
        let _ = switcher.try_update_value(ModeSwitcher::unmount);
    });

    // Server markup shows the initial selection; adopt the stored mode once
    // hydrated.
    Effect::new(move || {
        if let Some(current) = switcher.try_with_value(ModeSwitcher::mode) {
            mode.set(current);
        }
    });

    let on_toggle = move |_| {
        if let Some(effective) = switcher.try_with_value(ModeSwitcher::toggle) {
            log::debug!("mode toggled, rendering {effective}");
        }
    };

    let option = move |choice: Mode| {
        view! {
            <button
                type="button"
                class=move || {
                    if mode.get() == choice {
                        "btn light-dark-panel__option current-theme-btn"
                    } else {
                        "btn light-dark-panel__option"
                    }
                }
                on:click=move |_| {
                    let _ = switcher.try_with_value(|s| s.select(choice));
                }
            >
                <span class="light-dark-panel__glyph">{mode_glyph(choice)}</span>
                {mode_label(choice)}
            </button>
        }
    };

    view! {
        <div class="light-dark-switch" on:mouseleave=move |_| panel_open.set(false)>
            <button
                type="button"
                id="scheme-switch"
                class="btn light-dark-switch__toggle"
                aria-label="Light/Dark Mode"
                title=move || mode_label(mode.get())
                on:click=on_toggle
                on:mouseenter=move |_| panel_open.set(true)
            >
                {move || mode_glyph(mode.get())}
            </button>

            <div
                id="light-dark-panel"
                class=move || {
                    if panel_open.get() { "float-panel" } else { "float-panel float-panel-closed" }
                }
            >
                {Mode::ALL.into_iter().map(option).collect_view()}
            </div>
        </div>
    }
    .into_any()
}
