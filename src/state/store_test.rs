use super::*;
use crate::util::storage::{MemoryBackend, UnavailableBackend};

fn memory_store() -> (MemoryBackend, PreferenceStore) {
    let backend = MemoryBackend::new();
    let store = PreferenceStore::new(PrefsConfig::default(), backend.clone());
    (backend, store)
}

fn seeded(pairs: &[(&str, &str)]) -> PreferenceStore {
    PreferenceStore::new(PrefsConfig::default(), MemoryBackend::with_entries(pairs.iter().copied()))
}

// =============================================================
// Mode
// =============================================================

#[test]
fn mode_defaults_to_auto_when_unset() {
    let (_, store) = memory_store();
    assert_eq!(store.get_mode(), Mode::Auto);
}

#[test]
fn mode_defaults_to_auto_when_malformed() {
    assert_eq!(seeded(&[("theme", "sepia")]).get_mode(), Mode::Auto);
    assert_eq!(seeded(&[("theme", "")]).get_mode(), Mode::Auto);
}

#[test]
fn stored_mode_is_read() {
    assert_eq!(seeded(&[("theme", "dark")]).get_mode(), Mode::Dark);
}

#[test]
fn set_mode_writes_token_to_backend() {
    let (backend, store) = memory_store();
    assert_eq!(store.set_mode(Mode::Light), Persisted::Durable);
    assert_eq!(backend.raw("theme").as_deref(), Some("light"));
}

#[test]
fn mode_round_trips_with_persistence_disabled() {
    let store = PreferenceStore::new(PrefsConfig::default(), UnavailableBackend);
    for mode in Mode::ALL {
        assert_eq!(store.set_mode(mode), Persisted::SessionOnly);
        assert_eq!(store.get_mode(), mode);
    }
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_outside_browser_behaves_like_disabled_storage() {
    use crate::util::storage::LocalStorageBackend;

    let store = PreferenceStore::new(PrefsConfig::default(), LocalStorageBackend);
    assert_eq!(store.get_mode(), Mode::Auto);
    assert_eq!(store.set_mode(Mode::Dark), Persisted::SessionOnly);
    assert_eq!(store.get_mode(), Mode::Dark);
}

// =============================================================
// Hue
// =============================================================

#[test]
fn hue_defaults_to_config_when_unset() {
    let (_, store) = memory_store();
    assert_eq!(store.get_hue().get(), 250);
}

#[test]
fn hue_defaults_to_config_when_malformed() {
    assert_eq!(seeded(&[("hue", "orange")]).get_hue().get(), 250);
    assert_eq!(seeded(&[("hue", "12.5")]).get_hue().get(), 250);
}

#[test]
fn stored_out_of_range_hue_is_clamped() {
    assert_eq!(seeded(&[("hue", "999")]).get_hue().get(), 360);
    assert_eq!(seeded(&[("hue", "-10")]).get_hue().get(), 0);
}

#[test]
fn hue_round_trips_at_bounds_and_middle() {
    let (backend, store) = memory_store();
    for degrees in [0, 180, 360] {
        let hue = Hue::clamped(degrees);
        store.set_hue(hue);
        assert_eq!(store.get_hue(), hue);
        assert_eq!(backend.raw("hue"), Some(degrees.to_string()));
    }
}

#[test]
fn out_of_range_hue_is_clamped_before_storage() {
    let (backend, store) = memory_store();
    store.set_hue(Hue::clamped(400));
    assert_eq!(backend.raw("hue").as_deref(), Some("360"));
    store.set_hue(Hue::clamped(-30));
    assert_eq!(backend.raw("hue").as_deref(), Some("0"));
}

#[test]
fn hue_round_trips_with_persistence_disabled() {
    let store = PreferenceStore::new(PrefsConfig::default(), UnavailableBackend);
    assert_eq!(store.set_hue(Hue::clamped(180)), Persisted::SessionOnly);
    assert_eq!(store.get_hue().get(), 180);
}

#[test]
fn default_hue_ignores_session_state() {
    let (_, store) = memory_store();
    store.set_hue(Hue::clamped(40));
    assert_eq!(store.default_hue().get(), 250);
}

#[test]
fn custom_keys_and_default_are_honored() {
    let config = PrefsConfig::from_json(r#"{"defaultHue": 120, "modeKey": "m", "hueKey": "h"}"#).unwrap();
    let backend = MemoryBackend::new();
    let store = PreferenceStore::new(config, backend.clone());
    assert_eq!(store.get_hue().get(), 120);
    store.set_mode(Mode::Dark);
    store.set_hue(Hue::clamped(5));
    assert_eq!(backend.raw("m").as_deref(), Some("dark"));
    assert_eq!(backend.raw("h").as_deref(), Some("5"));
    assert_eq!(store.config().mode_key, "m");
}
