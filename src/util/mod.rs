//! Browser seams used by the preference state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate `localStorage`, `matchMedia`, and `<html>` access
//! behind small traits so state logic runs the same under SSR, in tests, and
//! in the browser.

pub mod document;
pub mod storage;
pub mod subscription;
pub mod system_scheme;
