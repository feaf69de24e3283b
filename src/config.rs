//! Preference configuration from defaults, environment, or site config JSON.

use serde::Deserialize;

use crate::error::PrefsError;
use crate::state::hue::{DEFAULT_HUE, HUE_MAX, Hue};
use crate::state::mode::EffectiveMode;

pub const DEFAULT_MODE_KEY: &str = "theme";
pub const DEFAULT_HUE_KEY: &str = "hue";

pub const ENV_DEFAULT_HUE: &str = "DISPLAY_PREFS_DEFAULT_HUE";
pub const ENV_MODE_KEY: &str = "DISPLAY_PREFS_MODE_KEY";
pub const ENV_HUE_KEY: &str = "DISPLAY_PREFS_HUE_KEY";
pub const ENV_SYSTEM_FALLBACK: &str = "DISPLAY_PREFS_SYSTEM_FALLBACK";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefsConfig {
    /// Hue used when nothing is stored, and the target of "reset".
    pub default_hue: Hue,
    /// Storage key holding the mode token.
    pub mode_key: String,
    /// Storage key holding the decimal hue.
    pub hue_key: String,
    /// Assumed system preference when the environment exposes none.
    pub system_fallback: EffectiveMode,
}

impl Default for PrefsConfig {
    fn default() -> Self {
        Self {
            default_hue: DEFAULT_HUE,
            mode_key: DEFAULT_MODE_KEY.to_owned(),
            hue_key: DEFAULT_HUE_KEY.to_owned(),
            system_fallback: EffectiveMode::Light,
        }
    }
}

/// Raw shape accepted by [`PrefsConfig::from_json`]. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawConfig {
    default_hue: Option<i64>,
    mode_key: Option<String>,
    hue_key: Option<String>,
    system_fallback: Option<String>,
}

impl PrefsConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `DISPLAY_PREFS_DEFAULT_HUE`: integer in 0..=360, default 250
    /// - `DISPLAY_PREFS_MODE_KEY`: default `theme`
    /// - `DISPLAY_PREFS_HUE_KEY`: default `hue`
    /// - `DISPLAY_PREFS_SYSTEM_FALLBACK`: `light` (default) or `dark`
    pub fn from_env() -> Result<Self, PrefsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup using the `from_env` variable names.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, PrefsError> {
        let default_hue = lookup(ENV_DEFAULT_HUE)
            .map(|raw| {
                raw.trim()
                    .parse::<i64>()
                    .map_err(|_| PrefsError::ConfigParse(format!("{ENV_DEFAULT_HUE} is not an integer: {raw}")))
            })
            .transpose()?;
        RawConfig {
            default_hue,
            mode_key: lookup(ENV_MODE_KEY),
            hue_key: lookup(ENV_HUE_KEY),
            system_fallback: lookup(ENV_SYSTEM_FALLBACK),
        }
        .validate()
    }

    /// Build config from a JSON object such as
    /// `{"defaultHue": 250, "modeKey": "theme", "systemFallback": "light"}`.
    pub fn from_json(raw: &str) -> Result<Self, PrefsError> {
        let parsed: RawConfig =
            serde_json::from_str(raw).map_err(|e| PrefsError::ConfigParse(format!("invalid JSON config: {e}")))?;
        parsed.validate()
    }

    /// Config the server embedded in the page with [`to_embedded_json`],
    /// or the defaults when the page carries none.
    ///
    /// [`to_embedded_json`]: PrefsConfig::to_embedded_json
    pub fn from_embedded() -> Result<Self, PrefsError> {
        match crate::util::document::embedded_config() {
            Some(raw) => Self::from_json(&raw),
            None => Ok(Self::default()),
        }
    }

    /// JSON form accepted by [`PrefsConfig::from_json`], safe to place inside
    /// a `<script>` element.
    pub fn to_embedded_json(&self) -> String {
        serde_json::json!({
            "defaultHue": self.default_hue.get(),
            "modeKey": self.mode_key,
            "hueKey": self.hue_key,
            "systemFallback": self.system_fallback.as_str(),
        })
        .to_string()
        .replace('<', "\\u003c")
    }
}

impl RawConfig {
    fn validate(self) -> Result<PrefsConfig, PrefsError> {
        let defaults = PrefsConfig::default();

        let default_hue = match self.default_hue {
            None => defaults.default_hue,
            Some(raw) => u16::try_from(raw)
                .ok()
                .and_then(Hue::new)
                .ok_or_else(|| PrefsError::ConfigParse(format!("default hue {raw} outside 0..={HUE_MAX}")))?,
        };
        let mode_key = parse_key("mode key", self.mode_key, defaults.mode_key)?;
        let hue_key = parse_key("hue key", self.hue_key, defaults.hue_key)?;
        if mode_key == hue_key {
            return Err(PrefsError::ConfigParse(format!("mode and hue share storage key {mode_key:?}")));
        }
        let system_fallback = match self.system_fallback.as_deref() {
            None => defaults.system_fallback,
            Some(raw) => raw
                .parse::<EffectiveMode>()
                .map_err(|_| PrefsError::ConfigParse(format!("unknown system fallback {raw:?} (expected light or dark)")))?,
        };

        Ok(PrefsConfig { default_hue, mode_key, hue_key, system_fallback })
    }
}

fn parse_key(what: &str, raw: Option<String>, default: String) -> Result<String, PrefsError> {
    match raw {
        None => Ok(default),
        Some(key) if key.trim().is_empty() => Err(PrefsError::ConfigParse(format!("{what} is empty"))),
        Some(key) => Ok(key.trim().to_owned()),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
