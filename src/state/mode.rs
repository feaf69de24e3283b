//! Display mode selection and resolution.
//!
//! DESIGN
//! ======
//! `Mode` is the user's persisted choice; `EffectiveMode` is what actually
//! gets rendered once `Auto` is resolved against the system preference.
//! Both resolution and the toggle cycle are pure so every caller computes
//! the same answer from the same inputs.

#[cfg(test)]
#[path = "mode_test.rs"]
mod mode_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PrefsError;

/// The user's selected display mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Light,
    Dark,
    /// Defer to the operating system's color-scheme preference.
    #[default]
    Auto,
}

/// Toggle order. `Mode::next` rotates through exactly these values.
const CYCLE: [Mode; 3] = [Mode::Light, Mode::Dark, Mode::Auto];

impl Mode {
    pub const ALL: [Mode; 3] = CYCLE;

    /// Storage token for this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }

    /// Resolve to the mode that should be rendered.
    pub fn resolve(self, system_prefers_dark: bool) -> EffectiveMode {
        match self {
            Self::Light => EffectiveMode::Light,
            Self::Dark => EffectiveMode::Dark,
            Self::Auto => EffectiveMode::from_prefers_dark(system_prefers_dark),
        }
    }

    /// Next mode in the toggle cycle: light, dark, auto, light, ...
    pub fn next(self) -> Mode {
        let index = CYCLE.iter().position(|m| *m == self).unwrap_or(0);
        CYCLE[(index + 1) % CYCLE.len()]
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = PrefsError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "auto" => Ok(Self::Auto),
            other => Err(PrefsError::UnknownMode(other.to_owned())),
        }
    }
}

/// The mode actually rendered on the document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectiveMode {
    #[default]
    Light,
    Dark,
}

impl EffectiveMode {
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Value written to the document's mode marker.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for EffectiveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EffectiveMode {
    type Err = PrefsError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(PrefsError::UnknownMode(other.to_owned())),
        }
    }
}
