//! Hue settings panel state.
//!
//! Slider movement only changes what this panel shows. Persisting and
//! rendering happen when the value settles (`settle`) or on `reset`.

#[cfg(test)]
#[path = "display_settings_test.rs"]
mod display_settings_test;

use std::cell::Cell;
use std::rc::Rc;

use super::hue::Hue;
use super::session::{DisplayPrefs, Selection};
use crate::error::PrefsError;
use crate::util::subscription::Subscription;

pub struct HuePanel {
    prefs: DisplayPrefs,
    hue: Rc<Cell<Hue>>,
    on_display: Rc<dyn Fn(Hue)>,
    system_watch: Subscription,
    selection_watch: Subscription,
}

impl HuePanel {
    /// Mount against the shared context. `on_display` runs whenever the
    /// displayed hue changes: local slider movement or a committed change
    /// from elsewhere.
    pub fn mount(prefs: &DisplayPrefs, on_display: impl Fn(Hue) + 'static) -> Self {
        let hue = Rc::new(Cell::new(prefs.hue()));
        let on_display: Rc<dyn Fn(Hue)> = Rc::new(on_display);

        // Only a change to the committed hue overrides an unsettled slide;
        // mode-only selection changes leave the draft alone.
        let committed = Cell::new(prefs.selection().hue);
        let local = Rc::clone(&hue);
        let notify = Rc::clone(&on_display);
        let selection_watch = prefs.selection_cell().subscribe(move |selection: &Selection| {
            if committed.replace(selection.hue) == selection.hue {
                return;
            }
            if local.replace(selection.hue) != selection.hue {
                notify(selection.hue);
            }
        });
        let system_watch = prefs.watch_system();
        prefs.refresh();

        Self { prefs: prefs.clone(), hue, on_display, system_watch, selection_watch }
    }

    /// Hue shown by this panel, possibly not yet committed.
    pub fn hue(&self) -> Hue {
        self.hue.get()
    }

    pub fn default_hue(&self) -> Hue {
        self.prefs.default_hue()
    }

    /// Whether the reset control has anything to do.
    pub fn is_default(&self) -> bool {
        self.hue() == self.default_hue()
    }

    /// Move the slider. Display only; nothing is persisted.
    pub fn slide(&self, hue: Hue) -> Hue {
        if self.hue.replace(hue) != hue {
            (self.on_display)(hue);
        }
        hue
    }

    /// Move the slider from a raw input value. Non-numeric input is
    /// rejected and leaves the panel unchanged.
    pub fn slide_input(&self, raw: &str) -> Result<Hue, PrefsError> {
        let hue = Hue::parse_input(raw)?;
        Ok(self.slide(hue))
    }

    /// Persist and render whatever the panel currently shows.
    pub fn settle(&self) -> Hue {
        self.prefs.commit_hue(self.hue())
    }

    /// Return to the configured default, persisted and rendered.
    pub fn reset(&self) -> Hue {
        self.slide(self.default_hue());
        self.settle()
    }

    /// Release both subscriptions. Safe to call more than once.
    pub fn unmount(&mut self) {
        self.system_watch.unsubscribe();
        self.selection_watch.unsubscribe();
    }
}

impl std::fmt::Debug for HuePanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HuePanel")
            .field("hue", &self.hue())
            .field("mounted", &self.selection_watch.is_active())
            .finish_non_exhaustive()
    }
}
