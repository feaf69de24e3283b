//! Light/dark/auto switcher widget state.
//!
//! One instance per mounted switcher. Each instance holds its own system
//! preference subscription and its own selection subscription, so several
//! switchers (e.g. desktop header and mobile drawer) can come and go
//! independently while still showing the same mode.

#[cfg(test)]
#[path = "switcher_test.rs"]
mod switcher_test;

use std::cell::Cell;
use std::rc::Rc;

use super::mode::{EffectiveMode, Mode};
use super::session::{DisplayPrefs, Selection};
use crate::util::subscription::Subscription;

pub struct ModeSwitcher {
    prefs: DisplayPrefs,
    mode: Rc<Cell<Mode>>,
    system_watch: Subscription,
    selection_watch: Subscription,
}

impl ModeSwitcher {
    /// Mount against the shared context. `on_display` runs whenever the
    /// displayed mode changes, whichever widget caused it.
    pub fn mount(prefs: &DisplayPrefs, on_display: impl Fn(Mode) + 'static) -> Self {
        let mode = Rc::new(Cell::new(prefs.mode()));

        let local = Rc::clone(&mode);
        let selection_watch = prefs.selection_cell().subscribe(move |selection: &Selection| {
            if local.replace(selection.mode) != selection.mode {
                on_display(selection.mode);
            }
        });
        let system_watch = prefs.watch_system();
        prefs.refresh();

        Self { prefs: prefs.clone(), mode, system_watch, selection_watch }
    }

    /// Mode shown by this widget. Stays `Auto` while the system flips.
    pub fn mode(&self) -> Mode {
        self.mode.get()
    }

    pub fn effective_mode(&self) -> EffectiveMode {
        self.prefs.effective_mode()
    }

    /// Explicit choice from the mode panel.
    pub fn select(&self, mode: Mode) -> EffectiveMode {
        let effective = self.prefs.select_mode(mode);
        self.mode.set(mode);
        effective
    }

    /// Advance to the next mode in the light, dark, auto cycle.
    pub fn toggle(&self) -> EffectiveMode {
        self.select(self.mode().next())
    }

    /// Release both subscriptions. Safe to call more than once.
    pub fn unmount(&mut self) {
        self.system_watch.unsubscribe();
        self.selection_watch.unsubscribe();
    }
}

impl std::fmt::Debug for ModeSwitcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModeSwitcher")
            .field("mode", &self.mode())
            .field("mounted", &self.selection_watch.is_active())
            .finish_non_exhaustive()
    }
}
