//! Crate error type.
//!
//! Every variant is recoverable. Internal seams return these so failures stay
//! testable; the public store and widget APIs absorb them and fall back to
//! defaults.

/// Errors produced by preference storage, parsing, and environment bindings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrefsError {
    /// No durable key-value store exists in this environment.
    #[error("preference storage unavailable")]
    StorageUnavailable,

    /// The backend rejected a read.
    #[error("storage read failed for key {key}: {reason}")]
    StorageRead { key: String, reason: String },

    /// The backend rejected a write (quota, private browsing, ...).
    #[error("storage write failed for key {key}: {reason}")]
    StorageWrite { key: String, reason: String },

    /// Hue input could not be interpreted as a number.
    #[error("invalid hue input: {0:?}")]
    InvalidHue(String),

    /// A mode token was not one of `light`, `dark`, `auto`.
    #[error("unknown mode token: {0:?}")]
    UnknownMode(String),

    /// The environment exposes no color-scheme preference signal.
    #[error("color scheme preference signal unavailable")]
    SchemeUnavailable,

    /// A configuration value could not be parsed or validated.
    #[error("config parse failed: {0}")]
    ConfigParse(String),
}
