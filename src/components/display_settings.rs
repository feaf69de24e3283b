//! Theme color panel: hue slider, readout, accent swatch, and reset.
//!
//! DESIGN
//! ======
//! `input` events only move the slider; `change` events settle the value,
//! which persists and renders it. The reset button is hidden while the
//! displayed hue already equals the configured default.

use leptos::prelude::*;

use super::use_display_prefs;
use crate::state::display_settings::HuePanel;
use crate::state::hue::{HUE_MAX, HUE_MIN, HUE_STEP};
use crate::state::mode::EffectiveMode;
use crate::state::session::DisplayPrefs;

/// Hue settings panel.
#[component]
pub fn DisplaySettings() -> impl IntoView {
    let Some(prefs) = use_display_prefs() else {
        log::warn!("DisplaySettings rendered without display prefs context");
        return ().into_any();
    };

    let hue = RwSignal::new(prefs.initial_selection().hue);
    let rendered_mode = RwSignal::new(prefs.initial_effective_mode());
    let default_hue = prefs.default_hue();
    let shared = StoredValue::new_local(prefs.clone());

    let panel = StoredValue::new_local(HuePanel::mount(&prefs, move |next| {
        let _ = hue.try_set(next);
    }));
    let document_watch = StoredValue::new_local(prefs.applier().subscribe(move |state| {
        let _ = rendered_mode.try_set(state.mode);
    }));
    on_cleanup(move || {
        let _ = panel.try_update_value(HuePanel::unmount);
        let _ = document_watch.try_update_value(|watch| watch.unsubscribe());
    });

    // Server markup shows the initial selection; adopt the stored hue and
    // the rendered mode once hydrated.
    Effect::new(move || {
        if let Some(current) = panel.try_with_value(HuePanel::hue) {
            hue.set(current);
        }
        if let Some(mode) = shared.try_with_value(DisplayPrefs::effective_mode) {
            rendered_mode.set(mode);
        }
    });

    let on_slide = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        if let Some(Err(err)) = panel.try_with_value(|p| p.slide_input(&raw)) {
            log::debug!("ignoring hue input: {err}");
        }
    };
    let on_settle = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        match panel.try_with_value(|p| p.slide_input(&raw).map(|_| p.settle())) {
            Some(Ok(settled)) => log::debug!("hue settled at {settled}"),
            Some(Err(err)) => log::debug!("ignoring settled hue input: {err}"),
            None => {}
        }
    };
    let on_reset = move |_| {
        let _ = panel.try_with_value(HuePanel::reset);
    };

    let swatch_style = move || {
        let mode: EffectiveMode = rendered_mode.get();
        format!("background: {}", hue.get().accent_color(mode))
    };

    view! {
        <div id="display-setting" class="display-settings">
            <div class="display-settings__header">
                <div class="display-settings__title">
                    "Theme Color"
                    <button
                        type="button"
                        class=move || {
                            if hue.get() == default_hue {
                                "btn display-settings__reset display-settings__reset--hidden"
                            } else {
                                "btn display-settings__reset"
                            }
                        }
                        aria-label="Reset to Default"
                        title="Reset to Default"
                        on:click=on_reset
                    >
                        "↺"
                    </button>
                </div>
                <span class="display-settings__swatch" style=swatch_style></span>
                <div id="hueValue" class="display-settings__value">
                    {move || hue.get().get()}
                </div>
            </div>
            <div class="display-settings__track">
                <input
                    type="range"
                    id="colorSlider"
                    class="slider"
                    aria-label="Theme Color"
                    min=HUE_MIN.to_string()
                    max=HUE_MAX.to_string()
                    step=HUE_STEP.to_string()
                    prop:value=move || hue.get().get().to_string()
                    on:input=on_slide
                    on:change=on_settle
                />
            </div>
        </div>
    }
    .into_any()
}
