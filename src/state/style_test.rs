use std::cell::RefCell;

use super::*;
use crate::util::document::RecordingSurface;

#[test]
fn apply_before_anything_else_writes_surface() {
    let surface = RecordingSurface::new();
    let applier = StyleApplier::new(surface.clone());
    assert_eq!(applier.current(), None);

    let state = applier.apply(EffectiveMode::Dark, Hue::clamped(220));

    assert_eq!(state, DocumentStyleState { mode: EffectiveMode::Dark, hue: Hue::clamped(220) });
    assert_eq!(applier.current(), Some(state));
    assert_eq!(surface.write_count(), 1);
}

#[test]
fn apply_twice_equals_apply_once() {
    let surface = RecordingSurface::new();
    let applier = StyleApplier::new(surface.clone());
    let notified = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&notified);
    let _sub = applier.subscribe(move |s| sink.borrow_mut().push(s));

    let first = applier.apply(EffectiveMode::Dark, Hue::clamped(220));
    let second = applier.apply(EffectiveMode::Dark, Hue::clamped(220));

    assert_eq!(first, second);
    assert_eq!(surface.write_count(), 1);
    assert_eq!(notified.borrow().len(), 1);
}

#[test]
fn exactly_one_mode_is_active_after_switching() {
    let surface = RecordingSurface::new();
    let applier = StyleApplier::new(surface.clone());
    applier.apply(EffectiveMode::Dark, Hue::clamped(220));
    applier.apply(EffectiveMode::Light, Hue::clamped(220));

    assert_eq!(applier.current().map(|s| s.mode), Some(EffectiveMode::Light));
    assert_eq!(surface.last().map(|s| s.mode), Some(EffectiveMode::Light));
}

#[test]
fn hue_change_alone_is_applied() {
    let surface = RecordingSurface::new();
    let applier = StyleApplier::new(surface.clone());
    applier.apply(EffectiveMode::Light, Hue::clamped(40));
    applier.apply(EffectiveMode::Light, Hue::clamped(250));

    assert_eq!(surface.write_count(), 2);
    assert_eq!(applier.current().map(|s| s.hue.get()), Some(250));
}

#[test]
fn applier_clones_share_state() {
    let surface = RecordingSurface::new();
    let applier = StyleApplier::new(surface.clone());
    let other = applier.clone();
    applier.apply(EffectiveMode::Dark, Hue::clamped(10));
    other.apply(EffectiveMode::Dark, Hue::clamped(10));
    assert_eq!(surface.write_count(), 1);
}
