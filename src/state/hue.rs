//! Accent hue angle and its color mapping.

#[cfg(test)]
#[path = "hue_test.rs"]
mod hue_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use super::mode::EffectiveMode;
use crate::error::PrefsError;

pub const HUE_MIN: u16 = 0;
pub const HUE_MAX: u16 = 360;
/// Granularity of the slider control. Off-step values are still valid.
pub const HUE_STEP: u16 = 5;
pub const DEFAULT_HUE: Hue = Hue(250);

/// Accent-color angle in degrees, always within `[HUE_MIN, HUE_MAX]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u16")]
pub struct Hue(u16);

impl Hue {
    /// Returns `None` when `degrees` is above `HUE_MAX`.
    pub const fn new(degrees: u16) -> Option<Self> {
        if degrees <= HUE_MAX { Some(Self(degrees)) } else { None }
    }

    /// Clamp any integer into range.
    pub fn clamped(degrees: i64) -> Self {
        let bounded = degrees.clamp(i64::from(HUE_MIN), i64::from(HUE_MAX));
        Self(u16::try_from(bounded).unwrap_or(HUE_MAX))
    }

    /// Parse hue from a manual input source (text field, slider value).
    ///
    /// Non-numeric input is rejected; numeric input outside the range is
    /// clamped. Fractional slider values are rounded.
    pub fn parse_input(raw: &str) -> Result<Self, PrefsError> {
        let trimmed = raw.trim();
        if let Ok(whole) = trimmed.parse::<i64>() {
            return Ok(Self::clamped(whole));
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Self::clamped(round_to_i64(value))),
            _ => Err(PrefsError::InvalidHue(raw.to_owned())),
        }
    }

    pub const fn get(self) -> u16 {
        self.0
    }

    /// Accent color for this hue under the given rendered mode.
    pub fn accent_color(self, mode: EffectiveMode) -> String {
        let lightness = match mode {
            EffectiveMode::Light => "0.70",
            EffectiveMode::Dark => "0.75",
        };
        format!("oklch({lightness} 0.14 {})", self.0)
    }
}

// Float-to-int `as` saturates at the i64 bounds.
#[allow(clippy::cast_possible_truncation)]
fn round_to_i64(value: f64) -> i64 {
    value.round() as i64
}

impl Default for Hue {
    fn default() -> Self {
        DEFAULT_HUE
    }
}

impl From<i64> for Hue {
    fn from(degrees: i64) -> Self {
        Self::clamped(degrees)
    }
}

impl From<Hue> for u16 {
    fn from(hue: Hue) -> Self {
        hue.0
    }
}

impl fmt::Display for Hue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
