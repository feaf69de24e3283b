//! Scoped subscription handle.
//!
//! Returned by every subscribe operation in the crate (observable cells and
//! color-scheme sources). Releasing is idempotent and also happens on drop,
//! so a widget that forgets to unsubscribe still stops receiving callbacks
//! once its state is torn down.

#[cfg(test)]
#[path = "subscription_test.rs"]
mod subscription_test;

/// Guard for a registered callback.
#[must_use = "dropping a Subscription immediately unsubscribes"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap a release action. It runs at most once.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    /// A handle with nothing to release, for sources that could not subscribe.
    pub fn detached() -> Self {
        Self { release: None }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    pub fn unsubscribe(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("active", &self.is_active()).finish()
    }
}
