//! Root application component and SSR shell.
//!
//! DESIGN
//! ======
//! Config is resolved once, on the server, in `shell`. It reaches `App` as a
//! prop and the page as an embedded JSON element; `hydrate` reads that element
//! back, so both render passes use the same default hue and storage keys.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};

use crate::components::display_settings::DisplaySettings;
use crate::components::light_dark_switch::LightDarkSwitch;
use crate::components::provide_display_prefs;
use crate::config::PrefsConfig;
use crate::state::session::DisplayPrefs;
use crate::util::document::CONFIG_ELEMENT_ID;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let config = PrefsConfig::from_env().unwrap_or_else(|err| {
        log::warn!("invalid display prefs config, using defaults: {err}");
        PrefsConfig::default()
    });
    let embedded = config.to_embedded_json();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script type="application/json" id=CONFIG_ELEMENT_ID inner_html=embedded></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App config/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the page-wide preference context from `config`, renders the stored
/// choice before any widget mounts, and provides the context to both widgets.
#[component]
pub fn App(config: PrefsConfig) -> impl IntoView {
    provide_meta_context();

    let prefs = DisplayPrefs::browser(config);
    prefs.init();
    provide_display_prefs(prefs);

    view! {
        <Title text="Display Settings"/>

        <header class="display-prefs__header">
            <LightDarkSwitch/>
        </header>
        <main class="display-prefs__main">
            <DisplaySettings/>
        </main>
    }
}
