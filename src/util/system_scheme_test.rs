use std::cell::RefCell;

use super::*;

fn recorder() -> (Rc<RefCell<Vec<bool>>>, SchemeCallback) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let callback: SchemeCallback = Rc::new(move |dark| sink.borrow_mut().push(dark));
    (seen, callback)
}

// =============================================================
// SystemPreference
// =============================================================

#[test]
fn unavailable_uses_fallback() {
    assert!(!SystemPreference::Unavailable.prefers_dark_or(false));
    assert!(SystemPreference::Unavailable.prefers_dark_or(true));
}

#[test]
fn reported_ignores_fallback() {
    assert!(SystemPreference::Reported(true).prefers_dark_or(false));
    assert!(!SystemPreference::Reported(false).prefers_dark_or(true));
}

#[test]
fn from_poll_keeps_unavailable_distinct() {
    assert_eq!(SystemPreference::from_poll(None), SystemPreference::Unavailable);
    assert_eq!(SystemPreference::from_poll(Some(false)), SystemPreference::Reported(false));
}

// =============================================================
// MediaQueryScheme (native)
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn media_query_reports_no_signal_outside_browser() {
    let (_, callback) = recorder();
    assert_eq!(MediaQueryScheme.prefers_dark(), None);
    assert_eq!(MediaQueryScheme.subscribe(callback).err(), Some(PrefsError::SchemeUnavailable));
}

// =============================================================
// ManualScheme
// =============================================================

#[test]
fn manual_scheme_notifies_on_change_only() {
    let scheme = ManualScheme::new(Some(true));
    let (seen, callback) = recorder();
    let _sub = scheme.subscribe(callback).unwrap();

    scheme.set_prefers_dark(true);
    scheme.set_prefers_dark(false);
    scheme.set_prefers_dark(false);
    scheme.set_prefers_dark(true);

    assert_eq!(*seen.borrow(), vec![false, true]);
    assert_eq!(scheme.prefers_dark(), Some(true));
}

#[test]
fn manual_scheme_subscriptions_are_independent() {
    let scheme = ManualScheme::new(Some(false));
    let (first_seen, first) = recorder();
    let (second_seen, second) = recorder();
    let mut first_sub = scheme.subscribe(first).unwrap();
    let _second_sub = scheme.subscribe(second).unwrap();
    assert_eq!(scheme.listener_count(), 2);

    scheme.set_prefers_dark(true);
    first_sub.unsubscribe();
    scheme.set_prefers_dark(false);

    assert_eq!(*first_seen.borrow(), vec![true]);
    assert_eq!(*second_seen.borrow(), vec![true, false]);
    assert_eq!(scheme.listener_count(), 1);
}

#[test]
fn no_callback_after_unsubscribe_even_mid_dispatch() {
    let scheme = ManualScheme::new(Some(false));
    let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

    // Registered first, so it runs first and cancels the later listener.
    let canceller = Rc::clone(&slot);
    let early: SchemeCallback = Rc::new(move |_| {
        if let Some(mut sub) = canceller.borrow_mut().take() {
            sub.unsubscribe();
        }
    });
    let _early_sub = scheme.subscribe(early).unwrap();

    let (late_seen, late) = recorder();
    *slot.borrow_mut() = Some(scheme.subscribe(late).unwrap());

    scheme.set_prefers_dark(true);
    assert!(late_seen.borrow().is_empty());
    assert_eq!(scheme.listener_count(), 1);
}

#[test]
fn dropping_subscription_releases_listener() {
    let scheme = ManualScheme::new(None);
    let (seen, callback) = recorder();
    {
        let _sub = scheme.subscribe(callback).unwrap();
        assert_eq!(scheme.listener_count(), 1);
    }
    assert_eq!(scheme.listener_count(), 0);
    scheme.set_prefers_dark(true);
    assert!(seen.borrow().is_empty());
}

#[test]
fn release_after_source_dropped_is_harmless() {
    let scheme = ManualScheme::new(Some(true));
    let (_, callback) = recorder();
    let mut sub = scheme.subscribe(callback).unwrap();
    drop(scheme);
    sub.unsubscribe();
    assert!(!sub.is_active());
}
