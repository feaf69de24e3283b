//! Shared preference context.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `DisplayPrefs` exists per page. It owns the store, the style applier,
//! the system color-scheme source, and the last known system preference.
//! Widgets hold clones and drive it through `select_mode` / `commit_hue`;
//! system notifications arrive through `watch_system`.
//!
//! DESIGN
//! ======
//! `refresh` is the only path to the applier. It reads the latest mode, hue
//! and system preference at call time, so a system notification that lands
//! between a user write and its render can never be rendered with stale
//! inputs. Since `apply` is idempotent, any number of writers may refresh.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::Cell;
use std::rc::{Rc, Weak};

use super::hue::Hue;
use super::mode::{EffectiveMode, Mode};
use super::observable::Observable;
use super::store::PreferenceStore;
use super::style::{DocumentStyleState, StyleApplier};
use crate::config::PrefsConfig;
use crate::util::document::{HtmlRootSurface, StyleSurface};
use crate::util::storage::{KeyValueBackend, LocalStorageBackend};
use crate::util::subscription::Subscription;
use crate::util::system_scheme::{ColorSchemeSource, MediaQueryScheme, SchemeCallback, SystemPreference};

/// The user's current choice, shared by every mounted widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub mode: Mode,
    pub hue: Hue,
}

struct PrefsInner {
    store: PreferenceStore,
    applier: StyleApplier,
    scheme: Box<dyn ColorSchemeSource>,
    system: Cell<SystemPreference>,
    selection: Observable<Selection>,
}

/// Page-wide preference context. Clones share state.
#[derive(Clone)]
pub struct DisplayPrefs {
    inner: Rc<PrefsInner>,
}

impl DisplayPrefs {
    pub fn new(
        config: PrefsConfig,
        backend: impl KeyValueBackend + 'static,
        scheme: impl ColorSchemeSource + 'static,
        surface: impl StyleSurface + 'static,
    ) -> Self {
        let store = PreferenceStore::new(config, backend);
        let selection = Observable::new(Selection { mode: store.get_mode(), hue: store.get_hue() });
        let system = SystemPreference::from_poll(scheme.prefers_dark());
        Self {
            inner: Rc::new(PrefsInner {
                store,
                applier: StyleApplier::new(surface),
                scheme: Box::new(scheme),
                system: Cell::new(system),
                selection,
            }),
        }
    }

    /// Context wired to `localStorage`, `matchMedia`, and the `<html>` root.
    pub fn browser(config: PrefsConfig) -> Self {
        Self::new(config, LocalStorageBackend, MediaQueryScheme, HtmlRootSurface)
    }

    /// Poll the system preference and render the stored choice.
    ///
    /// Call once at startup, before widgets mount, so the first paint
    /// already has the right mode.
    pub fn init(&self) -> DocumentStyleState {
        let system = SystemPreference::from_poll(self.inner.scheme.prefers_dark());
        self.inner.system.set(system);
        let state = self.refresh();
        log::info!("display prefs initialized: mode={} system={system:?} rendered={}", self.mode(), state.mode);
        state
    }

    /// Re-render from the latest mode, hue, and system preference.
    pub fn refresh(&self) -> DocumentStyleState {
        let hue = self.inner.store.get_hue();
        self.inner.applier.apply(self.effective_mode(), hue)
    }

    /// Effective mode for the current selection and system preference.
    pub fn effective_mode(&self) -> EffectiveMode {
        self.inner.store.get_mode().resolve(self.prefers_dark())
    }

    pub fn mode(&self) -> Mode {
        self.inner.store.get_mode()
    }

    pub fn hue(&self) -> Hue {
        self.inner.store.get_hue()
    }

    pub fn default_hue(&self) -> Hue {
        self.inner.store.default_hue()
    }

    pub fn system(&self) -> SystemPreference {
        self.inner.system.get()
    }

    /// System preference as a boolean, falling back to config when unknown.
    pub fn prefers_dark(&self) -> bool {
        let fallback = self.inner.store.config().system_fallback.is_dark();
        self.inner.system.get().prefers_dark_or(fallback)
    }

    /// Selection every render pass agrees on before storage is read.
    ///
    /// The server has neither storage nor a system signal, so this is what it
    /// renders. Widgets seed their view state with it and adopt the stored
    /// values once hydrated.
    pub fn initial_selection(&self) -> Selection {
        Selection { mode: Mode::default(), hue: self.default_hue() }
    }

    /// Effective mode for [`DisplayPrefs::initial_selection`].
    pub fn initial_effective_mode(&self) -> EffectiveMode {
        Mode::default().resolve(self.inner.store.config().system_fallback.is_dark())
    }

    pub fn selection(&self) -> Selection {
        self.inner.selection.get()
    }

    /// Shared selection cell that widgets sync their local display from.
    pub fn selection_cell(&self) -> &Observable<Selection> {
        &self.inner.selection
    }

    pub fn applier(&self) -> &StyleApplier {
        &self.inner.applier
    }

    pub fn document(&self) -> Option<DocumentStyleState> {
        self.inner.applier.current()
    }

    /// Persist `mode`, render it, then publish the new selection.
    pub fn select_mode(&self, mode: Mode) -> EffectiveMode {
        self.inner.store.set_mode(mode);
        let state = self.refresh();
        self.publish_selection();
        state.mode
    }

    /// Persist `hue`, render it, then publish the new selection.
    pub fn commit_hue(&self, hue: Hue) -> Hue {
        self.inner.store.set_hue(hue);
        self.refresh();
        self.publish_selection();
        hue
    }

    pub fn reset_hue(&self) -> Hue {
        self.commit_hue(self.default_hue())
    }

    /// Record a system preference report and re-render.
    pub fn on_system_change(&self, prefers_dark: bool) -> DocumentStyleState {
        self.inner.system.set(SystemPreference::Reported(prefers_dark));
        self.refresh()
    }

    /// Subscribe this context to system preference changes.
    ///
    /// Each caller gets an independent subscription. When the environment
    /// has no signal the returned handle is detached and the last polled
    /// value (or the configured fallback) stays in effect.
    pub fn watch_system(&self) -> Subscription {
        let weak: Weak<PrefsInner> = Rc::downgrade(&self.inner);
        let callback: SchemeCallback = Rc::new(move |prefers_dark| {
            if let Some(inner) = weak.upgrade() {
                DisplayPrefs { inner }.on_system_change(prefers_dark);
            }
        });
        match self.inner.scheme.subscribe(callback) {
            Ok(subscription) => subscription,
            Err(err) => {
                log::info!("system color scheme not observable, using a fixed preference: {err}");
                Subscription::detached()
            }
        }
    }

    fn publish_selection(&self) {
        self.inner.selection.set(Selection { mode: self.inner.store.get_mode(), hue: self.inner.store.get_hue() });
    }
}

impl std::fmt::Debug for DisplayPrefs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisplayPrefs")
            .field("selection", &self.selection())
            .field("system", &self.system())
            .field("document", &self.document())
            .finish()
    }
}
