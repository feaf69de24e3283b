//! Operating-system color-scheme preference signal.
//!
//! Reads and watches `(prefers-color-scheme: dark)` through `matchMedia`.
//! Requires a browser environment; elsewhere the signal is reported as
//! unavailable and callers fall back to a fixed preference.
//!
//! TRADE-OFFS
//! ==========
//! Each subscriber gets its own `change` listener rather than sharing one
//! registration, so widgets can mount and unmount independently.

#[cfg(test)]
#[path = "system_scheme_test.rs"]
mod system_scheme_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::subscription::Subscription;
use crate::error::PrefsError;

pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Callback invoked with the new "prefers dark" value.
pub type SchemeCallback = Rc<dyn Fn(bool)>;

/// What the environment last told us about its color-scheme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SystemPreference {
    /// No signal exists in this environment.
    #[default]
    Unavailable,
    /// The environment reported a value, either at startup or via a change.
    Reported(bool),
}

impl SystemPreference {
    pub fn from_poll(prefers_dark: Option<bool>) -> Self {
        prefers_dark.map_or(Self::Unavailable, Self::Reported)
    }

    /// Resolve to a boolean, using `fallback_dark` when no signal exists.
    pub fn prefers_dark_or(self, fallback_dark: bool) -> bool {
        match self {
            Self::Unavailable => fallback_dark,
            Self::Reported(prefers_dark) => prefers_dark,
        }
    }
}

/// Source of the system color-scheme preference.
pub trait ColorSchemeSource {
    /// Poll the current value; `None` when the environment has no signal.
    fn prefers_dark(&self) -> Option<bool>;

    /// Register for change notifications. No callback runs after the
    /// returned subscription is released.
    fn subscribe(&self, callback: SchemeCallback) -> Result<Subscription, PrefsError>;
}

/// Browser `matchMedia` source.
#[derive(Clone, Copy, Debug, Default)]
pub struct MediaQueryScheme;

#[cfg(feature = "hydrate")]
fn media_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?.match_media(DARK_SCHEME_QUERY).ok().flatten()
}

impl ColorSchemeSource for MediaQueryScheme {
    fn prefers_dark(&self) -> Option<bool> {
        #[cfg(feature = "hydrate")]
        {
            media_query().map(|mq| mq.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn subscribe(&self, callback: SchemeCallback) -> Result<Subscription, PrefsError> {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            use wasm_bindgen::closure::Closure;

            let mq = media_query().ok_or(PrefsError::SchemeUnavailable)?;
            let active = Rc::new(Cell::new(true));
            let listener_active = Rc::clone(&active);
            let closure = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
                move |event: web_sys::MediaQueryListEvent| {
                    if listener_active.get() {
                        callback(event.matches());
                    }
                },
            );
            mq.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
                .map_err(|_| PrefsError::SchemeUnavailable)?;

            Ok(Subscription::new(move || {
                active.set(false);
                if mq
                    .remove_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
                    .is_err()
                {
                    log::debug!("color scheme listener already detached");
                }
            }))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = callback;
            Err(PrefsError::SchemeUnavailable)
        }
    }
}

struct Listener {
    id: u64,
    active: Rc<Cell<bool>>,
    callback: SchemeCallback,
}

#[derive(Default)]
struct ManualInner {
    prefers_dark: Cell<Option<bool>>,
    listeners: RefCell<Vec<Listener>>,
    next_id: Cell<u64>,
}

/// Source driven by the host instead of the browser.
///
/// Used for server rendering (a fixed answer) and for exercising the
/// notification path headlessly. Clones share state.
#[derive(Clone, Default)]
pub struct ManualScheme {
    inner: Rc<ManualInner>,
}

impl ManualScheme {
    pub fn new(prefers_dark: Option<bool>) -> Self {
        let scheme = Self::default();
        scheme.inner.prefers_dark.set(prefers_dark);
        scheme
    }

    /// Report a new value. Listeners only hear about actual changes, the
    /// same way a media query `change` event behaves.
    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        if self.inner.prefers_dark.replace(Some(prefers_dark)) == Some(prefers_dark) {
            return;
        }
        let snapshot: Vec<(Rc<Cell<bool>>, SchemeCallback)> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|l| (Rc::clone(&l.active), Rc::clone(&l.callback)))
            .collect();
        for (active, callback) in snapshot {
            if active.get() {
                callback(prefers_dark);
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

impl ColorSchemeSource for ManualScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.inner.prefers_dark.get()
    }

    fn subscribe(&self, callback: SchemeCallback) -> Result<Subscription, PrefsError> {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        let active = Rc::new(Cell::new(true));
        self.inner.listeners.borrow_mut().push(Listener { id, active: Rc::clone(&active), callback });

        let inner = Rc::downgrade(&self.inner);
        Ok(Subscription::new(move || {
            active.set(false);
            if let Some(inner) = inner.upgrade() {
                inner.listeners.borrow_mut().retain(|l| l.id != id);
            }
        }))
    }
}

impl std::fmt::Debug for ManualScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualScheme")
            .field("prefers_dark", &self.inner.prefers_dark.get())
            .field("listeners", &self.listener_count())
            .finish()
    }
}
