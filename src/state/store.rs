//! Persisted mode and hue preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! Persistence is best-effort. Every write lands in an in-memory session
//! value first, then goes to the backend; a backend failure only costs
//! durability across reloads. Reads prefer the session value, so whatever
//! this run wrote is what this run reads back.
//!
//! TRADE-OFFS
//! ==========
//! Setters report a [`Persisted`] outcome instead of an error. Callers that
//! care (tests, diagnostics) can look at it; widgets ignore it.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::Cell;

use super::hue::Hue;
use super::mode::Mode;
use crate::config::PrefsConfig;
use crate::error::PrefsError;
use crate::util::storage::KeyValueBackend;

/// Where a write ended up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Persisted {
    /// Written to the backend and the session.
    Durable,
    /// Backend failed; the value lives only for this run.
    SessionOnly,
}

/// Reads and writes the two preference values.
pub struct PreferenceStore {
    backend: Box<dyn KeyValueBackend>,
    config: PrefsConfig,
    session_mode: Cell<Option<Mode>>,
    session_hue: Cell<Option<Hue>>,
}

impl PreferenceStore {
    pub fn new(config: PrefsConfig, backend: impl KeyValueBackend + 'static) -> Self {
        Self { backend: Box::new(backend), config, session_mode: Cell::new(None), session_hue: Cell::new(None) }
    }

    /// Stored mode, or `Mode::Auto` when unset or unparsable.
    pub fn get_mode(&self) -> Mode {
        if let Some(mode) = self.session_mode.get() {
            return mode;
        }
        match self.read(&self.config.mode_key) {
            Some(raw) => raw.parse().unwrap_or_else(|err: PrefsError| {
                log::debug!("ignoring stored mode: {err}");
                Mode::default()
            }),
            None => Mode::default(),
        }
    }

    pub fn set_mode(&self, mode: Mode) -> Persisted {
        self.session_mode.set(Some(mode));
        self.write(&self.config.mode_key, mode.as_str())
    }

    /// Stored hue, or the configured default when unset or unparsable.
    /// Numeric values outside the range are clamped.
    pub fn get_hue(&self) -> Hue {
        if let Some(hue) = self.session_hue.get() {
            return hue;
        }
        match self.read(&self.config.hue_key) {
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(degrees) => Hue::clamped(degrees),
                Err(_) => {
                    log::debug!("ignoring stored hue: {raw:?}");
                    self.default_hue()
                }
            },
            None => self.default_hue(),
        }
    }

    pub fn set_hue(&self, hue: Hue) -> Persisted {
        self.session_hue.set(Some(hue));
        self.write(&self.config.hue_key, &hue.to_string())
    }

    /// The configured default, independent of session state.
    pub fn default_hue(&self) -> Hue {
        self.config.default_hue
    }

    pub fn config(&self) -> &PrefsConfig {
        &self.config
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.backend.get(key) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("preference read skipped: {err}");
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) -> Persisted {
        match self.backend.set(key, value) {
            Ok(()) => Persisted::Durable,
            Err(err) => {
                log::warn!("preference kept for this session only: {err}");
                Persisted::SessionOnly
            }
        }
    }
}

impl std::fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("config", &self.config)
            .field("session_mode", &self.session_mode.get())
            .field("session_hue", &self.session_hue.get())
            .finish_non_exhaustive()
    }
}
