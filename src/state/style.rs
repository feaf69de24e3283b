//! Applied document styling, the shared sink every widget renders from.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use std::rc::Rc;

use super::hue::Hue;
use super::mode::EffectiveMode;
use super::observable::Observable;
use crate::util::document::StyleSurface;
use crate::util::subscription::Subscription;

/// What is currently rendered on the document root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DocumentStyleState {
    pub mode: EffectiveMode,
    pub hue: Hue,
}

/// Writes full styling state to a surface and publishes it.
///
/// Does not depend on any widget being mounted, so it can run during
/// startup before the first render.
#[derive(Clone)]
pub struct StyleApplier {
    state: Observable<Option<DocumentStyleState>>,
    surface: Rc<dyn StyleSurface>,
}

impl StyleApplier {
    pub fn new(surface: impl StyleSurface + 'static) -> Self {
        Self { state: Observable::new(None), surface: Rc::new(surface) }
    }

    /// Render `mode` and `hue`. Repeating the last applied state is a no-op:
    /// no surface write, no notification.
    pub fn apply(&self, mode: EffectiveMode, hue: Hue) -> DocumentStyleState {
        let next = DocumentStyleState { mode, hue };
        if self.state.get() == Some(next) {
            return next;
        }
        self.surface.write(&next);
        log::debug!("applied document style: mode={mode} hue={hue}");
        self.state.set(Some(next));
        next
    }

    /// Last applied state, `None` before the first `apply`.
    pub fn current(&self) -> Option<DocumentStyleState> {
        self.state.get()
    }

    /// Observe applied changes.
    pub fn subscribe(&self, callback: impl Fn(DocumentStyleState) + 'static) -> Subscription {
        self.state.subscribe(move |state| {
            if let Some(state) = state {
                callback(*state);
            }
        })
    }
}

impl std::fmt::Debug for StyleApplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleApplier").field("state", &self.state.get()).finish_non_exhaustive()
    }
}
