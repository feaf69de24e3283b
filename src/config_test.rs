use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_config_matches_storage_contract() {
    let config = PrefsConfig::default();
    assert_eq!(config.default_hue.get(), 250);
    assert_eq!(config.mode_key, "theme");
    assert_eq!(config.hue_key, "hue");
    assert_eq!(config.system_fallback, EffectiveMode::Light);
}

#[test]
fn empty_lookup_yields_defaults() {
    let config = PrefsConfig::from_lookup(|_| None).unwrap();
    assert_eq!(config, PrefsConfig::default());
}

// =============================================================
// from_lookup
// =============================================================

#[test]
fn lookup_overrides_every_field() {
    let config = PrefsConfig::from_lookup(lookup_from(&[
        (ENV_DEFAULT_HUE, "120"),
        (ENV_MODE_KEY, "site-mode"),
        (ENV_HUE_KEY, "site-hue"),
        (ENV_SYSTEM_FALLBACK, "dark"),
    ]))
    .unwrap();
    assert_eq!(config.default_hue.get(), 120);
    assert_eq!(config.mode_key, "site-mode");
    assert_eq!(config.hue_key, "site-hue");
    assert_eq!(config.system_fallback, EffectiveMode::Dark);
}

#[test]
fn non_integer_default_hue_is_rejected() {
    let err = PrefsConfig::from_lookup(lookup_from(&[(ENV_DEFAULT_HUE, "blue")])).unwrap_err();
    assert!(matches!(err, PrefsError::ConfigParse(msg) if msg.contains(ENV_DEFAULT_HUE)));
}

#[test]
fn out_of_range_default_hue_is_rejected_not_clamped() {
    assert!(PrefsConfig::from_lookup(lookup_from(&[(ENV_DEFAULT_HUE, "361")])).is_err());
    assert!(PrefsConfig::from_lookup(lookup_from(&[(ENV_DEFAULT_HUE, "-1")])).is_err());
    assert!(PrefsConfig::from_lookup(lookup_from(&[(ENV_DEFAULT_HUE, "360")])).is_ok());
}

#[test]
fn unknown_fallback_is_rejected() {
    let err = PrefsConfig::from_lookup(lookup_from(&[(ENV_SYSTEM_FALLBACK, "auto")])).unwrap_err();
    assert!(err.to_string().contains("system fallback"));
}

#[test]
fn empty_or_shared_keys_are_rejected() {
    assert!(PrefsConfig::from_lookup(lookup_from(&[(ENV_MODE_KEY, "  ")])).is_err());
    assert!(PrefsConfig::from_lookup(lookup_from(&[(ENV_HUE_KEY, "theme")])).is_err());
}

// =============================================================
// from_json
// =============================================================

#[test]
fn json_partial_object_keeps_defaults() {
    let config = PrefsConfig::from_json(r#"{"defaultHue": 40}"#).unwrap();
    assert_eq!(config.default_hue.get(), 40);
    assert_eq!(config.mode_key, "theme");
}

#[test]
fn json_full_object() {
    let config =
        PrefsConfig::from_json(r#"{"defaultHue": 0, "modeKey": "m", "hueKey": "h", "systemFallback": "dark"}"#).unwrap();
    assert_eq!(config.default_hue.get(), 0);
    assert_eq!(config.mode_key, "m");
    assert_eq!(config.hue_key, "h");
    assert_eq!(config.system_fallback, EffectiveMode::Dark);
}

#[test]
fn json_errors_are_config_parse() {
    assert!(matches!(PrefsConfig::from_json("not json"), Err(PrefsError::ConfigParse(_))));
    assert!(matches!(PrefsConfig::from_json(r#"{"defaultHue": 720}"#), Err(PrefsError::ConfigParse(_))));
}

// =============================================================
// Embedded page config
// =============================================================

#[test]
fn embedded_json_carries_server_config_to_the_browser() {
    let server = PrefsConfig::from_lookup(lookup_from(&[
        (ENV_DEFAULT_HUE, "120"),
        (ENV_MODE_KEY, "site-theme"),
        (ENV_SYSTEM_FALLBACK, "dark"),
    ]))
    .unwrap();

    let browser = PrefsConfig::from_json(&server.to_embedded_json()).unwrap();

    assert_eq!(browser, server);
    assert_eq!(browser.default_hue.get(), 120);
}

#[test]
fn embedded_json_cannot_close_its_script_element() {
    let config = PrefsConfig { mode_key: "a</script><b>".to_owned(), ..PrefsConfig::default() };
    let embedded = config.to_embedded_json();
    assert!(!embedded.contains('<'));
    assert_eq!(PrefsConfig::from_json(&embedded).unwrap().mode_key, "a</script><b>");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn page_without_embedded_config_uses_defaults() {
    assert_eq!(PrefsConfig::from_embedded(), Ok(PrefsConfig::default()));
}
