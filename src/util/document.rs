//! Document root styling surface.
//!
//! The browser surface writes a `data-theme` attribute and the `--hue`
//! custom property on the `<html>` element. Both overwrite in place, so
//! writing the same state twice leaves the DOM unchanged.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::style::DocumentStyleState;

pub const MODE_ATTRIBUTE: &str = "data-theme";
pub const HUE_PROPERTY: &str = "--hue";
/// Id of the JSON `<script>` element the server embeds preference config in.
pub const CONFIG_ELEMENT_ID: &str = "display-prefs-config";

/// Text of the embedded config element, if the page has one.
pub fn embedded_config() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?.document()?.get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Where applied styling ends up.
pub trait StyleSurface {
    fn write(&self, state: &DocumentStyleState);
}

/// The `<html>` element of the current page.
#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlRootSurface;

impl StyleSurface for HtmlRootSurface {
    fn write(&self, state: &DocumentStyleState) {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(root) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            else {
                log::debug!("no document root; skipping style write");
                return;
            };
            if root.set_attribute(MODE_ATTRIBUTE, state.mode.as_str()).is_err() {
                log::warn!("failed to set {MODE_ATTRIBUTE} on document root");
            }
            match root.dyn_into::<web_sys::HtmlElement>() {
                Ok(html) => {
                    if html.style().set_property(HUE_PROPERTY, &state.hue.to_string()).is_err() {
                        log::warn!("failed to set {HUE_PROPERTY} on document root");
                    }
                }
                Err(_) => log::debug!("document root is not an HtmlElement"),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = state;
        }
    }
}

/// Headless surface that keeps every write, for server rendering snapshots
/// and tests. Clones share the same log.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    writes: Rc<RefCell<Vec<DocumentStyleState>>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_count(&self) -> usize {
        self.writes.borrow().len()
    }

    pub fn last(&self) -> Option<DocumentStyleState> {
        self.writes.borrow().last().copied()
    }
}

impl StyleSurface for RecordingSurface {
    fn write(&self, state: &DocumentStyleState) {
        self.writes.borrow_mut().push(*state);
    }
}
